use anchor_lang::prelude::*;

use crate::draw;
use crate::error::RaffleError;

/// No program state is read or written; verification needs nothing but
/// the published triple and the claimed winner.
#[derive(Accounts)]
pub struct VerifyDraw<'info> {
    pub caller: Signer<'info>,
}

/// Re-runs the draw against a published (seed, entropy, ticket count)
/// triple and fails unless it reproduces the claimed winner. Anyone may
/// call this; it exists so third parties can audit a draw without
/// trusting the operator.
pub fn process_verify_draw(
    _ctx: Context<VerifyDraw>,
    seed: String,
    external_entropy: String,
    ticket_count: u32,
    claimed_winner: u32,
) -> Result<()> {
    let verified =
        draw::verify_winning_ticket(&seed, &external_entropy, ticket_count, claimed_winner)?;
    require!(verified, RaffleError::VerificationFailed);

    msg!(
        "Draw verified: ticket {} of {} matches the published inputs",
        claimed_winner,
        ticket_count
    );

    Ok(())
}
