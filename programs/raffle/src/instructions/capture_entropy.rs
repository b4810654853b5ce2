use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;

use crate::constants::COMPETITION_SEED;
use crate::draw::to_hex;
use crate::error::RaffleError;
use crate::events::EntropyCaptured;
use crate::state::Competition;

/// Accounts for capturing external entropy. Permissionless.
#[derive(Accounts)]
pub struct CaptureEntropy<'info> {
    #[account(mut)]
    pub cranker: Signer<'info>,

    #[account(
        mut,
        seeds = [COMPETITION_SEED, competition.competition_id.to_le_bytes().as_ref()],
        bump = competition.bump,
    )]
    pub competition: Box<Account<'info, Competition>>,

    /// CHECK: address-constrained to the SlotHashes sysvar; raw data is
    /// parsed in the handler.
    #[account(address = sysvar::slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Pins the draw's external entropy to the most recent slot hash.
///
/// Only runnable once the competition is past `ends_at`, so the value
/// cannot be known while tickets are still on sale. Captured exactly
/// once; the stored hex digest plus the revealed seed form the public,
/// re-verifiable draw input. If the sysvar holds no entries the call
/// fails and the competition simply stays non-terminal until the next
/// sweep cycle.
pub fn process_capture_entropy(ctx: Context<CaptureEntropy>) -> Result<()> {
    let clock = Clock::get()?;
    let competition = &mut ctx.accounts.competition;

    require!(!competition.is_terminal(), RaffleError::CompetitionClosed);
    require!(
        competition.is_due(clock.unix_timestamp),
        RaffleError::CompetitionNotEnded
    );
    require!(competition.tickets_sold > 0, RaffleError::NoTicketsSold);
    require!(
        !competition.entropy_captured(),
        RaffleError::EntropyAlreadyCaptured
    );

    // SlotHashes layout: u64 entry count, then (slot: u64 LE, hash: [u8; 32])
    // pairs, newest first.
    let data = ctx.accounts.slot_hashes.try_borrow_data()?;
    require!(data.len() >= 48, RaffleError::EntropyUnavailable);
    let count = u64::from_le_bytes(data[0..8].try_into().unwrap());
    require!(count >= 1, RaffleError::EntropyUnavailable);
    let slot = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let hash_bytes: [u8; 32] = data[16..48].try_into().unwrap();

    competition.external_entropy = to_hex(&hash_bytes);
    competition.entropy_slot = slot;
    competition.updated_at = clock.unix_timestamp;

    msg!(
        "Captured entropy for competition {} from slot {}",
        competition.competition_id,
        slot
    );

    emit!(EntropyCaptured {
        competition: competition.key(),
        slot,
        external_entropy: competition.external_entropy.clone(),
    });

    Ok(())
}
