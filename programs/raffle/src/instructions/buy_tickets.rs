use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{COMPETITION_SEED, ENTRY_COUNTER_SEED, TICKET_ORDER_SEED};
use crate::error::RaffleError;
use crate::events::TicketsPurchased;
use crate::state::{Competition, EntryCounter, TicketOrder};

/// Accounts required to purchase tickets.
///
/// `order_seed` is a client-chosen value: the buyer cannot derive a PDA
/// from the ticket numbers they will receive, since those are only
/// assigned when the transaction executes.
#[derive(Accounts)]
#[instruction(order_seed: [u8; 8])]
pub struct BuyTickets<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [COMPETITION_SEED, competition.competition_id.to_le_bytes().as_ref()],
        bump = competition.bump,
        has_one = credits_mint,
    )]
    pub competition: Box<Account<'info, Competition>>,

    /// The order being created: one contiguous range of ticket numbers.
    #[account(
        init,
        payer = buyer,
        space = 8 + TicketOrder::INIT_SPACE,
        seeds = [
            TICKET_ORDER_SEED,
            competition.key().as_ref(),
            buyer.key().as_ref(),
            order_seed.as_ref(),
        ],
        bump
    )]
    pub ticket_order: Box<Account<'info, TicketOrder>>,

    /// Per-buyer running count, enforcing `max_tickets_per_user`.
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + EntryCounter::INIT_SPACE,
        seeds = [
            ENTRY_COUNTER_SEED,
            competition.key().as_ref(),
            buyer.key().as_ref(),
        ],
        bump
    )]
    pub entry_counter: Box<Account<'info, EntryCounter>>,

    pub credits_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Buyer's credit account; the debit happens here.
    #[account(
        mut,
        associated_token::mint = credits_mint,
        associated_token::authority = buyer,
        associated_token::token_program = token_program,
    )]
    pub buyer_credits: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Competition vault receiving the payment.
    #[account(
        mut,
        associated_token::mint = credits_mint,
        associated_token::authority = competition,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Purchases `quantity` tickets as a single atomic unit.
///
/// The allocated numbers are `tickets_sold + 1 ..= tickets_sold + quantity`.
/// The runtime serializes every writer of the competition account, so two
/// concurrent purchases can never be assigned overlapping ranges, and the
/// whole instruction either lands (payment, order, counter advance) or
/// leaves no trace.
pub fn process_buy_tickets(
    ctx: Context<BuyTickets>,
    order_seed: [u8; 8],
    quantity: u16,
) -> Result<()> {
    let clock = Clock::get()?;
    let competition = &mut ctx.accounts.competition;

    require!(quantity >= 1, RaffleError::InvalidQuantity);
    require!(
        competition.is_open_for_sales(clock.unix_timestamp),
        RaffleError::CompetitionNotOpen
    );
    require!(
        competition.capacity_allows(quantity as u32),
        RaffleError::CapacityExceeded
    );
    require!(
        competition.quota_allows(ctx.accounts.entry_counter.tickets_held, quantity),
        RaffleError::UserQuotaExceeded
    );

    // Debit the buyer's credits into the vault. Insufficient balance
    // fails the whole purchase here, before any ledger state moves.
    let cost = (quantity as u64)
        .checked_mul(competition.ticket_price)
        .ok_or(RaffleError::NumericalOverflow)?;
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.buyer_credits.to_account_info(),
                mint: ctx.accounts.credits_mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        cost,
        ctx.accounts.credits_mint.decimals,
    )?;

    // Allocate the next contiguous range.
    let first_ticket = competition
        .tickets_sold
        .checked_add(1)
        .ok_or(RaffleError::NumericalOverflow)?;
    competition.tickets_sold = competition
        .tickets_sold
        .checked_add(quantity as u32)
        .ok_or(RaffleError::NumericalOverflow)?;
    competition.updated_at = clock.unix_timestamp;

    let entry_counter = &mut ctx.accounts.entry_counter;
    entry_counter.competition = competition.key();
    entry_counter.buyer = ctx.accounts.buyer.key();
    entry_counter.tickets_held = entry_counter
        .tickets_held
        .checked_add(quantity)
        .ok_or(RaffleError::NumericalOverflow)?;
    entry_counter.bump = ctx.bumps.entry_counter;

    let ticket_order = &mut ctx.accounts.ticket_order;
    ticket_order.competition = competition.key();
    ticket_order.buyer = ctx.accounts.buyer.key();
    ticket_order.first_ticket = first_ticket;
    ticket_order.ticket_count = quantity as u32;
    ticket_order.purchased_at = clock.unix_timestamp;
    ticket_order.is_winner = false;
    ticket_order.order_seed = order_seed;
    ticket_order.bump = ctx.bumps.ticket_order;

    msg!(
        "Issued tickets {}..={} of competition {}",
        first_ticket,
        competition.tickets_sold,
        competition.competition_id
    );

    emit!(TicketsPurchased {
        competition: competition.key(),
        buyer: ctx.accounts.buyer.key(),
        first_ticket,
        quantity: quantity as u32,
        tickets_sold: competition.tickets_sold,
    });

    Ok(())
}
