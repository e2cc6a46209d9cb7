/// Events module for the Meme Coin Game program
/// Contains all event structures that are emitted by the program instructions
/// for off-chain tracking and monitoring.
use anchor_lang::prelude::*;

/// Emitted when a new game is initialized
#[event]
pub struct GameInitialized {
    pub game_id: Pubkey,
    pub game_state: Pubkey,
    pub initializer: Pubkey,
    pub initial_prize_per_box: u64,
    pub prize_pool: u64,
}

/// Emitted when a player stakes lamports into a box
#[event]
pub struct GameEntered {
    pub player: Pubkey,
    pub box_number: u8,
    pub meme_coin_name: String,
    pub amount: u64,
    pub box_amount: u64,
    pub prize_pool: u64,
    pub game_state: Pubkey,
}

/// Emitted when a contributor withdraws their share of a box
#[event]
pub struct PrizeClaimed {
    pub player: Pubkey,
    pub box_number: u8,
    pub meme_coin_name: String,
    pub payout: u64,
    pub prize_pool: u64,
    pub game_state: Pubkey,
}

/// Emitted when the last contributor drains a box and it returns to empty
#[event]
pub struct BoxReset {
    pub box_number: u8,
    pub game_state: Pubkey,
}
