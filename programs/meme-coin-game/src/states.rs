/// States module for the Meme Coin Game program
///
/// Contains all account structures and the game rules that mutate them.
/// Rules take the caller key and clock timestamp as plain arguments.
use anchor_lang::prelude::*;

use crate::{constants::*, errors::MemeGameError, helpers::validate_meme_coin_name};

/// Main state account for a game
///
/// Holds the prize pool and the nine boxes players compete over.
/// Addressed by the PDA `[GAME_STATE, game_id]`.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct GameState {
    /// Account used as the seed for this game's PDA
    pub game_id: Pubkey,
    /// Total lamports held across every box
    pub prize_pool: u64,
    /// Fixed set of prize boxes
    pub boxes: [PrizeBox; BOX_COUNT],
    /// PDA bump seed for this account
    pub bump: u8,
}

/// A single prize slot, owned by one meme coin label at a time
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Default, Debug, PartialEq, Eq)]
pub struct PrizeBox {
    /// Label of the meme coin holding the box, empty when unclaimed
    #[max_len(MAX_MEME_COIN_NAME_LEN)]
    pub meme_coin_name: String,
    /// Lamports currently held by the box
    pub amount_in_lamports: u64,
    /// Unix timestamp of the first contribution under the current label
    pub start_time: i64,
    /// One running stake per contributor under the current label, in order
    /// of first entry
    #[max_len(MAX_CONTRIBUTORS_PER_BOX)]
    pub contributions: Vec<Contribution>,
}

/// A player's accumulated stake in a box
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub contributor: Pubkey,
    pub amount: u64,
}

/// Result of a successful claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Lamports owed to the claimant
    pub payout: u64,
    /// Whether the claim drained the box back to empty
    pub box_reset: bool,
}

fn box_index(box_number: u8) -> Result<usize> {
    let index = box_number as usize;
    require!(index < BOX_COUNT, MemeGameError::InvalidBoxNumber);
    Ok(index)
}

impl GameState {
    /// Set up a fresh game with every box holding `initial_prize_per_box`.
    ///
    /// Returns the total lamports the initializer has to fund.
    pub fn seed(&mut self, game_id: Pubkey, bump: u8, initial_prize_per_box: u64) -> Result<u64> {
        let prize_pool = initial_prize_per_box
            .checked_mul(BOX_COUNT as u64)
            .ok_or(MemeGameError::MathOverflow)?;

        self.game_id = game_id;
        self.bump = bump;
        self.prize_pool = prize_pool;
        for prize_box in self.boxes.iter_mut() {
            *prize_box = PrizeBox {
                amount_in_lamports: initial_prize_per_box,
                ..PrizeBox::default()
            };
        }

        Ok(prize_pool)
    }

    /// Record a stake of `amount` lamports into a box.
    ///
    /// The first stake into an empty box claims it for `meme_coin_name` and
    /// starts its timer. Later stakes must use the same label; repeat stakes
    /// from a contributor add to their existing record. Nothing is mutated
    /// unless every check passes.
    pub fn enter(
        &mut self,
        box_number: u8,
        meme_coin_name: &str,
        contributor: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        let index = box_index(box_number)?;
        require!(amount > 0, MemeGameError::InvalidAmount);
        validate_meme_coin_name(meme_coin_name)?;

        let prize_pool = self
            .prize_pool
            .checked_add(amount)
            .ok_or(MemeGameError::MathOverflow)?;
        let prize_box = &mut self.boxes[index];

        let opening = prize_box.is_empty();
        if !opening {
            require!(
                prize_box.meme_coin_name == meme_coin_name,
                MemeGameError::MemeCoinMismatch
            );
        }
        let existing = prize_box
            .contributions
            .iter()
            .position(|c| c.contributor == contributor);
        let stake = match existing {
            Some(position) => prize_box.contributions[position]
                .amount
                .checked_add(amount)
                .ok_or(MemeGameError::MathOverflow)?,
            None => {
                require!(
                    prize_box.contributions.len() < MAX_CONTRIBUTORS_PER_BOX,
                    MemeGameError::BoxFull
                );
                amount
            }
        };
        let box_amount = prize_box
            .amount_in_lamports
            .checked_add(amount)
            .ok_or(MemeGameError::MathOverflow)?;

        if opening {
            prize_box.meme_coin_name = meme_coin_name.to_string();
            prize_box.start_time = now;
        }
        prize_box.amount_in_lamports = box_amount;
        match existing {
            Some(position) => prize_box.contributions[position].amount = stake,
            None => prize_box.contributions.push(Contribution {
                contributor,
                amount: stake,
            }),
        }
        self.prize_pool = prize_pool;

        Ok(())
    }

    /// Withdraw `claimant`'s share of a box.
    ///
    /// The share is proportional to the claimant's stake; the last remaining
    /// contributor takes whatever the box still holds and the box resets.
    pub fn claim(
        &mut self,
        box_number: u8,
        meme_coin_name: &str,
        claimant: &Pubkey,
        now: i64,
    ) -> Result<ClaimOutcome> {
        let index = box_index(box_number)?;
        let prize_box = &mut self.boxes[index];

        require!(
            !prize_box.is_empty() && prize_box.meme_coin_name == meme_coin_name,
            MemeGameError::NotBoxOwner
        );

        let time_elapsed = now
            .checked_sub(prize_box.start_time)
            .ok_or(MemeGameError::MathOverflow)?;
        require!(
            time_elapsed >= CLAIM_LOCK_SECONDS,
            MemeGameError::TimeNotElapsed
        );

        let claimant_stake = prize_box.contributed_by(claimant)?;
        require!(claimant_stake > 0, MemeGameError::NoContribution);
        let total_stake = prize_box.total_contributions()?;

        let payout = if claimant_stake == total_stake {
            prize_box.amount_in_lamports
        } else {
            let share = prize_box.amount_in_lamports as u128 * claimant_stake as u128
                / total_stake as u128;
            u64::try_from(share).map_err(|_| MemeGameError::MathOverflow)?
        };

        let box_amount = prize_box
            .amount_in_lamports
            .checked_sub(payout)
            .ok_or(MemeGameError::MathOverflow)?;
        let prize_pool = self
            .prize_pool
            .checked_sub(payout)
            .ok_or(MemeGameError::MathOverflow)?;

        prize_box.contributions.retain(|c| c.contributor != *claimant);
        prize_box.amount_in_lamports = box_amount;
        let box_reset = prize_box.contributions.is_empty();
        if box_reset {
            prize_box.reset();
        }
        self.prize_pool = prize_pool;

        Ok(ClaimOutcome { payout, box_reset })
    }

    /// Sum of the lamports held by every box
    pub fn total_box_amounts(&self) -> Result<u64> {
        self.boxes
            .iter()
            .try_fold(0u64, |acc, b| acc.checked_add(b.amount_in_lamports))
            .ok_or_else(|| error!(MemeGameError::MathOverflow))
    }

    /// The prize pool must always equal the lamports held across the boxes
    pub fn ensure_pool_balanced(&self) -> Result<()> {
        require_eq!(
            self.prize_pool,
            self.total_box_amounts()?,
            MemeGameError::PrizePoolMismatch
        );
        Ok(())
    }
}

impl PrizeBox {
    pub fn is_empty(&self) -> bool {
        self.meme_coin_name.is_empty()
    }

    /// Total staked by `contributor` under the current label
    pub fn contributed_by(&self, contributor: &Pubkey) -> Result<u64> {
        self.contributions
            .iter()
            .filter(|c| c.contributor == *contributor)
            .try_fold(0u64, |acc, c| acc.checked_add(c.amount))
            .ok_or_else(|| error!(MemeGameError::MathOverflow))
    }

    pub fn total_contributions(&self) -> Result<u64> {
        self.contributions
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.amount))
            .ok_or_else(|| error!(MemeGameError::MathOverflow))
    }

    /// Clear the label, balance, timer and contributions
    pub fn reset(&mut self) {
        *self = PrizeBox::default();
    }
}
