use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::{COMPETITION_SEED, DEFAULT_MAX_TICKETS_PER_USER};
use crate::error::RaffleError;
use crate::events::CompetitionCreated;
use crate::state::{Competition, CompetitionStatus};

/// Accounts required to create a competition.
///
/// Also initializes the vault token account that receives credit
/// payments for this competition.
#[derive(Accounts)]
#[instruction(competition_id: u64)]
pub struct CreateCompetition<'info> {
    /// The operator. Becomes the competition authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Competition::INIT_SPACE,
        seeds = [COMPETITION_SEED, competition_id.to_le_bytes().as_ref()],
        bump
    )]
    pub competition: Box<Account<'info, Competition>>,

    /// The SPL mint tickets are priced in.
    pub credits_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault holding ticket proceeds, owned by the competition PDA.
    #[account(
        init,
        payer = authority,
        associated_token::mint = credits_mint,
        associated_token::authority = competition,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Creates a competition in the `Active` state.
///
/// The operator supplies `seed_commitment = sha256(seed)` for a seed
/// generated off-chain with a CSPRNG and kept secret until the draw.
/// Committing before any ticket is sold is what makes the eventual
/// reveal binding.
pub fn process_create_competition(
    ctx: Context<CreateCompetition>,
    competition_id: u64,
    ticket_price: u64,
    total_tickets: u32,
    max_tickets_per_user: Option<u16>,
    ends_at: i64,
    seed_commitment: [u8; 32],
) -> Result<()> {
    let clock = Clock::get()?;
    let max_per_user = max_tickets_per_user.unwrap_or(DEFAULT_MAX_TICKETS_PER_USER);

    require!(ticket_price > 0, RaffleError::InvalidTicketPrice);
    require!(total_tickets > 0, RaffleError::InvalidCapacity);
    require!(max_per_user > 0, RaffleError::InvalidUserCap);
    require!(ends_at > clock.unix_timestamp, RaffleError::InvalidEndTime);

    let competition = &mut ctx.accounts.competition;
    competition.authority = ctx.accounts.authority.key();
    competition.competition_id = competition_id;
    competition.credits_mint = ctx.accounts.credits_mint.key();
    competition.ticket_price = ticket_price;
    competition.total_tickets = total_tickets;
    competition.tickets_sold = 0;
    competition.max_tickets_per_user = max_per_user;
    competition.status = CompetitionStatus::Active;
    competition.ends_at = ends_at;
    competition.created_at = clock.unix_timestamp;
    competition.updated_at = clock.unix_timestamp;
    competition.seed_commitment = seed_commitment;
    competition.revealed_seed = String::new();
    competition.external_entropy = String::new();
    competition.entropy_slot = 0;
    competition.winning_ticket = 0;
    competition.winner = Pubkey::default();
    competition.bump = ctx.bumps.competition;

    emit!(CompetitionCreated {
        competition: competition.key(),
        competition_id,
        ticket_price,
        total_tickets,
        max_tickets_per_user: max_per_user,
        ends_at,
    });

    Ok(())
}
