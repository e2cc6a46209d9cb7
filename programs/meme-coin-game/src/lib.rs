//! Meme Coin Game Program
//!
//! A Solana program where players back meme coins by staking SOL into one of
//! nine prize boxes:
//! - The first stake into an empty box claims it for a meme coin label
//! - Later stakes must back the same label and accumulate in the box
//! - Once the claim lock has passed, contributors withdraw their share and
//!   the box returns to empty when the last one claims
//!
//! Every game lives in a single PDA derived from a caller-supplied game id,
//! which also holds the prize pool lamports.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod states;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use states::*;

declare_id!("CkrDU8u3B4fehXLzNPvDKpbbjZ5fAWt6bDp3t6j9prXj");

#[program]
pub mod meme_coin_game {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    /// Create a game and seed every box with `initial_prize_per_box`
    pub fn initialize(ctx: Context<Initialize>, initial_prize_per_box: u64) -> Result<()> {
        instructions::admin::initialize(ctx, initial_prize_per_box)
    }

    // ========================================
    // User Instructions
    // ========================================

    /// Stake lamports into a box under a meme coin label
    pub fn enter_game(
        ctx: Context<EnterGame>,
        meme_coin_name: String,
        amount_in_lamports: u64,
        box_number: u8,
    ) -> Result<()> {
        instructions::user::enter_game(ctx, meme_coin_name, amount_in_lamports, box_number)
    }

    /// Withdraw the caller's share of a box
    pub fn claim_prize(
        ctx: Context<ClaimPrize>,
        box_number: u8,
        meme_coin_name: String,
    ) -> Result<()> {
        instructions::user::claim_prize(ctx, box_number, meme_coin_name)
    }
}
