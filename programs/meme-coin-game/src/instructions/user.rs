use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, helpers::*};

/// ========================================
/// User Instructions
/// ========================================

/// Stake lamports into a box
///
/// The first stake into an empty box claims it for `meme_coin_name` and
/// starts its claim timer. Further stakes must name the same meme coin.
///
/// Process:
/// 1. Validate box number, amount and label
/// 2. Record the contribution and update box and pool totals
/// 3. Transfer the stake into the game state PDA
///
/// Args:
/// - ctx: Context containing game_state and the player
/// - meme_coin_name: Label the stake backs
/// - amount_in_lamports: Size of the stake
/// - box_number: Box index, 0 through 8
///
/// Returns: Result indicating success or failure
pub fn enter_game(
    ctx: Context<EnterGame>,
    meme_coin_name: String,
    amount_in_lamports: u64,
    box_number: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();

    ctx.accounts.game_state.enter(
        box_number,
        &meme_coin_name,
        player,
        amount_in_lamports,
        clock.unix_timestamp,
    )?;
    ctx.accounts.game_state.ensure_pool_balanced()?;

    transfer_into_game(
        &ctx.accounts.player,
        ctx.accounts.game_state.to_account_info(),
        &ctx.accounts.system_program,
        amount_in_lamports,
    )?;

    let game_state = &ctx.accounts.game_state;
    let box_amount = game_state.boxes[box_number as usize].amount_in_lamports;

    emit!(GameEntered {
        player,
        box_number,
        meme_coin_name,
        amount: amount_in_lamports,
        box_amount,
        prize_pool: game_state.prize_pool,
        game_state: game_state.key(),
    });

    Ok(())
}

/// Claim a share of a box
///
/// Pays the caller their pro-rata share of the box. The last contributor to
/// claim drains the box and it returns to empty.
///
/// Process:
/// 1. Validate label, claim lock and the caller's contribution
/// 2. Remove the caller's contributions and reduce box and pool totals
/// 3. Pay the share out of the game state PDA
///
/// Args:
/// - ctx: Context containing game_state and the player
/// - box_number: Box index, 0 through 8
/// - meme_coin_name: Label currently holding the box
///
/// Returns: Result indicating success or failure
pub fn claim_prize(
    ctx: Context<ClaimPrize>,
    box_number: u8,
    meme_coin_name: String,
) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();

    let outcome = ctx.accounts.game_state.claim(
        box_number,
        &meme_coin_name,
        &player,
        clock.unix_timestamp,
    )?;
    ctx.accounts.game_state.ensure_pool_balanced()?;

    transfer_from_game(
        &ctx.accounts.game_state.to_account_info(),
        &ctx.accounts.player.to_account_info(),
        outcome.payout,
    )?;

    msg!(
        "Box {} paid {} lamports to {}",
        box_number,
        outcome.payout,
        player
    );

    let game_state = &ctx.accounts.game_state;
    emit!(PrizeClaimed {
        player,
        box_number,
        meme_coin_name,
        payout: outcome.payout,
        prize_pool: game_state.prize_pool,
        game_state: game_state.key(),
    });

    if outcome.box_reset {
        emit!(BoxReset {
            box_number,
            game_state: game_state.key(),
        });
    }

    Ok(())
}
