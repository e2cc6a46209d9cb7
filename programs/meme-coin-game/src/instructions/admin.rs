use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, helpers::*};

/// ========================================
/// Admin Instructions
/// ========================================

/// Initialize a new game
///
/// Creates the game state PDA for `game_id`, seeds each of the nine boxes
/// with `initial_prize_per_box` and funds the prize pool from the caller.
///
/// Args:
/// - ctx: Context containing game_state PDA, game_id and user accounts
/// - initial_prize_per_box: Lamports placed in every box at creation
///
/// Returns: Result indicating success or failure
///
/// Constraints:
/// - User must hold at least nine times the per-box prize
pub fn initialize(ctx: Context<Initialize>, initial_prize_per_box: u64) -> Result<()> {
    let game_id = ctx.accounts.game_id.key();
    let bump = ctx.bumps.game_state;

    let prize_pool = ctx
        .accounts
        .game_state
        .seed(game_id, bump, initial_prize_per_box)?;

    ctx.accounts.game_state.ensure_pool_balanced()?;

    // The initializer funds the whole pool up front
    transfer_into_game(
        &ctx.accounts.user,
        ctx.accounts.game_state.to_account_info(),
        &ctx.accounts.system_program,
        prize_pool,
    )?;

    msg!(
        "Game {} initialized with {} lamports per box",
        game_id,
        initial_prize_per_box
    );

    emit!(GameInitialized {
        game_id,
        game_state: ctx.accounts.game_state.key(),
        initializer: ctx.accounts.user.key(),
        initial_prize_per_box,
        prize_pool,
    });
    Ok(())
}
