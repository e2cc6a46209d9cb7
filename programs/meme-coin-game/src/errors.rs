/// Error definitions for the Meme Coin Game program
///
/// Contains all custom error types that can be returned by the program instructions.
use anchor_lang::prelude::*;

/// Custom error codes for the meme coin game program
#[error_code]
pub enum MemeGameError {
    #[msg("Insufficient funds to initialize the game")]
    InsufficientFunds,
    #[msg("Invalid box number")]
    InvalidBoxNumber,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Meme coin name must be between 1 and 32 bytes")]
    InvalidMemeCoinName,
    #[msg("The box already holds a different meme coin")]
    MemeCoinMismatch,
    #[msg("Not the leading memecoin")]
    NotBoxOwner,
    #[msg("No contribution found for the player")]
    NoContribution,
    #[msg("60 minutes have not elapsed yet")]
    TimeNotElapsed,
    #[msg("The box cannot record any more contributions")]
    BoxFull,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Prize pool does not match the sum of the boxes")]
    PrizePoolMismatch,
}
