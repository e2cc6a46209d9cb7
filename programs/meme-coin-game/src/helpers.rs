use crate::{constants::MAX_MEME_COIN_NAME_LEN, errors::MemeGameError};

use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// ========================================
/// Lamport Helper Functions
/// ========================================

/// Moves native SOL from a signer into the game state PDA
///
/// Validates the payer's balance and executes a system program transfer.
///
/// Args:
/// - payer: Signer funding the transfer
/// - game_state: The game state PDA receiving the lamports
/// - system: System program for the CPI
/// - amount: Lamports to move
///
/// Returns: Result indicating success or failure of the transfer
pub fn transfer_into_game<'info>(
    payer: &Signer<'info>,
    game_state: AccountInfo<'info>,
    system: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    // ============ BALANCE VERIFICATION ============
    require!(
        payer.lamports() >= amount,
        MemeGameError::InsufficientFunds
    );

    // ============ TRANSFER EXECUTION ============
    let cpi_context = CpiContext::new(
        system.to_account_info(),
        system_program::Transfer {
            from: payer.to_account_info(),
            to: game_state,
        },
    );
    system_program::transfer(cpi_context, amount)?;

    Ok(())
}

/// Pays lamports out of the program-owned game state PDA
///
/// The PDA is owned by this program, so lamports are debited directly rather
/// than through the system program. The account never drops below its rent
/// exempt minimum.
///
/// Args:
/// - game_state: The game state PDA paying out
/// - recipient: Account receiving the lamports
/// - amount: Lamports to move
///
/// Returns: Result indicating success or failure of the payout
pub fn transfer_from_game<'info>(
    game_state: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_floor = Rent::get()?.minimum_balance(game_state.data_len());
    let remaining = game_state
        .lamports()
        .checked_sub(amount)
        .ok_or(MemeGameError::InsufficientFunds)?;
    require!(remaining >= rent_floor, MemeGameError::InsufficientFunds);
    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(MemeGameError::MathOverflow)?;

    **game_state.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;

    Ok(())
}

/// Checks a meme coin label is non-empty and fits the account allocation
pub fn validate_meme_coin_name(meme_coin_name: &str) -> Result<()> {
    require!(
        !meme_coin_name.is_empty() && meme_coin_name.len() <= MAX_MEME_COIN_NAME_LEN,
        MemeGameError::InvalidMemeCoinName
    );
    Ok(())
}
