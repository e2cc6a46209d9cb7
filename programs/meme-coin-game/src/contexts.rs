use anchor_lang::prelude::*;

use crate::{constants::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for initializing a new game
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The game state account (PDA), funded by the initializer
    #[account(
        init,
        payer = user,
        space = 8 + GameState::INIT_SPACE,
        seeds = [GAME_STATE, game_id.key().as_ref()],
        bump
    )]
    pub game_state: Account<'info, GameState>,
    /// Identifier of the game
    /// CHECK: Only used as a seed for the game state PDA
    pub game_id: UncheckedAccount<'info>,
    /// The account creating and funding the game
    #[account(mut)]
    pub user: Signer<'info>,
    /// System program for account creation and the funding transfer
    pub system_program: Program<'info, System>,
}

/// Accounts required for staking into a box
#[derive(Accounts)]
pub struct EnterGame<'info> {
    /// The game state account (PDA)
    #[account(
        mut,
        seeds = [GAME_STATE, game_state.game_id.as_ref()],
        bump = game_state.bump,
    )]
    pub game_state: Account<'info, GameState>,
    /// Player staking lamports
    #[account(mut)]
    pub player: Signer<'info>,
    /// System program for the stake transfer
    pub system_program: Program<'info, System>,
}

/// Accounts required for claiming a box
#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    /// The game state account (PDA) paying out
    #[account(
        mut,
        seeds = [GAME_STATE, game_state.game_id.as_ref()],
        bump = game_state.bump,
    )]
    pub game_state: Account<'info, GameState>,
    /// Contributor receiving their share
    #[account(mut)]
    pub player: Signer<'info>,
}
