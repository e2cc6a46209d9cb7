use anchor_lang::prelude::*;
/// Constants module for the Meme Coin Game program
///
/// Contains all program-wide constants and configuration values.

/// Number of boxes in every game
#[constant]
pub const BOX_COUNT: usize = 9;

/// Maximum length in bytes of a meme coin label
#[constant]
pub const MAX_MEME_COIN_NAME_LEN: usize = 32;

/// Maximum number of distinct contributors a single box can record.
/// Bounded by the 10 KiB limit on accounts created through CPI.
#[constant]
pub const MAX_CONTRIBUTORS_PER_BOX: usize = 25;

/// Seconds a box must hold its label before it can be claimed.
/// Localnet builds with `skip-claim-lock` claim immediately.
#[constant]
pub const CLAIM_LOCK_SECONDS: i64 = if cfg!(feature = "skip-claim-lock") {
    0
} else {
    3600
};

/// Seeds for PDA derivation

/// Seed for game state PDA
#[constant]
pub const GAME_STATE: &[u8] = b"game-state";
