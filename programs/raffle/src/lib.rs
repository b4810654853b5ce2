//! Competition lifecycle and provably-fair draw engine.
//!
//! Users buy numbered tickets with SPL credits; when a competition
//! closes, a single ticket is selected through a commit-reveal draw
//! anyone can re-verify: the operator commits `sha256(seed)` at
//! creation, a recent slot hash is pinned as external entropy after the
//! end time, and the winner is `sha256("{seed}:{entropy}")` reduced to
//! a ticket number.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod raffle {
    use super::*;

    /// Create a competition in the `Active` state with a published
    /// seed commitment.
    pub fn create_competition(
        ctx: Context<CreateCompetition>,
        competition_id: u64,
        ticket_price: u64,
        total_tickets: u32,
        max_tickets_per_user: Option<u16>,
        ends_at: i64,
        seed_commitment: [u8; 32],
    ) -> Result<()> {
        process_create_competition(
            ctx,
            competition_id,
            ticket_price,
            total_tickets,
            max_tickets_per_user,
            ends_at,
            seed_commitment,
        )
    }

    /// Atomically purchase `quantity` tickets, allocating the next
    /// contiguous range of ticket numbers.
    pub fn buy_tickets(
        ctx: Context<BuyTickets>,
        order_seed: [u8; 8],
        quantity: u16,
    ) -> Result<()> {
        process_buy_tickets(ctx, order_seed, quantity)
    }

    /// Permissionless lifecycle crank: promotes a competition into its
    /// ending window or cancels it once due with zero sales. No-op
    /// otherwise; safe on any schedule.
    pub fn sweep_competition(ctx: Context<SweepCompetition>) -> Result<()> {
        process_sweep_competition(ctx)
    }

    /// Permissionless crank: pin the draw's external entropy to the
    /// latest slot hash once the competition is past its end time.
    pub fn capture_entropy(ctx: Context<CaptureEntropy>) -> Result<()> {
        process_capture_entropy(ctx)
    }

    /// Operator reveals the committed seed; the winner is computed and
    /// recorded and the competition becomes `Complete`, atomically.
    pub fn complete_draw(ctx: Context<CompleteDraw>, seed: String) -> Result<()> {
        process_complete_draw(ctx, seed)
    }

    /// Publicly re-verify a recorded draw from its published triple.
    pub fn verify_draw(
        ctx: Context<VerifyDraw>,
        seed: String,
        external_entropy: String,
        ticket_count: u32,
        claimed_winner: u32,
    ) -> Result<()> {
        process_verify_draw(ctx, seed, external_entropy, ticket_count, claimed_winner)
    }

    /// Operator drains the vault once the competition is terminal.
    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
        process_withdraw_proceeds(ctx)
    }
}
