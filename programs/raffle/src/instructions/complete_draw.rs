use anchor_lang::prelude::*;

use crate::constants::{COMPETITION_SEED, MAX_SEED_LEN};
use crate::draw;
use crate::error::RaffleError;
use crate::events::WinnerDrawn;
use crate::state::{Competition, CompetitionStatus, TicketOrder};

/// Accounts required to complete a draw.
///
/// The caller computes the winning ticket off-chain from the revealed
/// seed and the captured entropy, and passes the order covering it; the
/// handler recomputes the number on-chain and rejects any mismatch.
#[derive(Accounts)]
pub struct CompleteDraw<'info> {
    /// The competition authority, revealing the committed seed.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [COMPETITION_SEED, competition.competition_id.to_le_bytes().as_ref()],
        bump = competition.bump,
        constraint = competition.authority == authority.key() @ RaffleError::Unauthorized,
    )]
    pub competition: Box<Account<'info, Competition>>,

    /// The order whose range contains the winning ticket number.
    #[account(
        mut,
        constraint = winning_order.competition == competition.key()
            @ RaffleError::WinningTicketNotFound,
    )]
    pub winning_order: Box<Account<'info, TicketOrder>>,
}

/// Reveals the seed, selects the winner, and finalizes the competition,
/// all in one transaction.
///
/// Order of checks matters for fairness: the seed must hash to the
/// commitment published at creation, and the entropy must already be
/// pinned, so neither side can steer the outcome. If the computed
/// ticket number falls outside the passed order, nothing commits and
/// the competition stays non-terminal; with the ledger's density
/// invariant intact that means the wrong order account was passed, and
/// the correct one can be supplied on retry. A winner is never
/// re-rolled.
pub fn process_complete_draw(ctx: Context<CompleteDraw>, seed: String) -> Result<()> {
    let clock = Clock::get()?;
    let competition = &mut ctx.accounts.competition;

    require!(!competition.is_terminal(), RaffleError::CompetitionClosed);
    require!(
        competition.is_due(clock.unix_timestamp),
        RaffleError::CompetitionNotEnded
    );
    require!(competition.tickets_sold > 0, RaffleError::NoTicketsSold);
    require!(
        competition.entropy_captured(),
        RaffleError::EntropyNotCaptured
    );
    require!(seed.len() <= MAX_SEED_LEN, RaffleError::SeedTooLong);
    require!(
        draw::seed_commitment(&seed) == competition.seed_commitment,
        RaffleError::SeedCommitmentMismatch
    );

    let winning_ticket = draw::select_winning_ticket(
        &seed,
        &competition.external_entropy,
        competition.tickets_sold,
    )?;

    let winning_order = &mut ctx.accounts.winning_order;
    if !winning_order.covers(winning_ticket) {
        msg!(
            "Winning ticket {} of competition {} not covered by order {}..={}",
            winning_ticket,
            competition.competition_id,
            winning_order.first_ticket,
            winning_order.first_ticket + winning_order.ticket_count - 1
        );
        return err!(RaffleError::WinningTicketNotFound);
    }

    winning_order.is_winner = true;

    competition.revealed_seed = seed;
    competition.winning_ticket = winning_ticket;
    competition.winner = winning_order.buyer;
    competition.status = CompetitionStatus::Complete;
    competition.updated_at = clock.unix_timestamp;

    msg!(
        "Competition {} complete: ticket {} of {} wins",
        competition.competition_id,
        winning_ticket,
        competition.tickets_sold
    );

    emit!(WinnerDrawn {
        competition: competition.key(),
        seed: competition.revealed_seed.clone(),
        external_entropy: competition.external_entropy.clone(),
        tickets_sold: competition.tickets_sold,
        winning_ticket,
        winner: winning_order.buyer,
    });

    Ok(())
}
