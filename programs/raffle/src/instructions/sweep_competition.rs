use anchor_lang::prelude::*;

use crate::constants::COMPETITION_SEED;
use crate::events::{CompetitionCancelled, EndingWindowEntered};
use crate::state::{Competition, CompetitionStatus};

/// Accounts for one sweep step. Permissionless: any caller may crank
/// the lifecycle, the transition rules alone decide what happens.
#[derive(Accounts)]
pub struct SweepCompetition<'info> {
    #[account(mut)]
    pub cranker: Signer<'info>,

    #[account(
        mut,
        seeds = [COMPETITION_SEED, competition.competition_id.to_le_bytes().as_ref()],
        bump = competition.bump,
    )]
    pub competition: Box<Account<'info, Competition>>,
}

/// Applies whichever lifecycle transition is due:
///
/// - `Active -> Ending` inside the ending window,
/// - `Active|Ending -> Cancelled` once past `ends_at` with zero sales.
///
/// A due competition with sold tickets is left alone here; it completes
/// through entropy capture and the operator's seed reveal. Terminal
/// competitions, and ones with nothing due, are a no-op, so the sweep
/// can be re-run on any schedule without double-processing. When two
/// crankers race, the runtime serializes them and the loser observes
/// the already-applied state.
pub fn process_sweep_competition(ctx: Context<SweepCompetition>) -> Result<()> {
    let clock = Clock::get()?;
    let competition = &mut ctx.accounts.competition;

    match competition.due_transition(clock.unix_timestamp) {
        Some(CompetitionStatus::Ending) => {
            competition.status = CompetitionStatus::Ending;
            competition.updated_at = clock.unix_timestamp;
            msg!(
                "Competition {} entered its ending window",
                competition.competition_id
            );
            emit!(EndingWindowEntered {
                competition: competition.key(),
                ends_at: competition.ends_at,
            });
        }
        Some(CompetitionStatus::Cancelled) => {
            // Zero tickets sold: no draw is attempted and no seed,
            // entropy or winner fields are ever written.
            competition.status = CompetitionStatus::Cancelled;
            competition.updated_at = clock.unix_timestamp;
            msg!("Competition {} cancelled", competition.competition_id);
            emit!(CompetitionCancelled {
                competition: competition.key(),
            });
        }
        _ => {
            msg!(
                "No lifecycle transition due for competition {}",
                competition.competition_id
            );
        }
    }

    Ok(())
}
