use anchor_lang::prelude::*;

use crate::state::CompetitionStatus;

#[event]
pub struct CompetitionCreated {
    pub competition: Pubkey,
    pub competition_id: u64,
    pub ticket_price: u64,
    pub total_tickets: u32,
    pub max_tickets_per_user: u16,
    pub ends_at: i64,
}

#[event]
pub struct TicketsPurchased {
    pub competition: Pubkey,
    pub buyer: Pubkey,
    /// First ticket number of the allocated range.
    pub first_ticket: u32,
    pub quantity: u32,
    pub tickets_sold: u32,
}

#[event]
pub struct EndingWindowEntered {
    pub competition: Pubkey,
    pub ends_at: i64,
}

#[event]
pub struct CompetitionCancelled {
    pub competition: Pubkey,
}

#[event]
pub struct EntropyCaptured {
    pub competition: Pubkey,
    pub slot: u64,
    pub external_entropy: String,
}

/// The published triple plus the recorded winner; everything a third
/// party needs to re-verify the draw.
#[event]
pub struct WinnerDrawn {
    pub competition: Pubkey,
    pub seed: String,
    pub external_entropy: String,
    pub tickets_sold: u32,
    pub winning_ticket: u32,
    pub winner: Pubkey,
}

#[event]
pub struct ProceedsWithdrawn {
    pub competition: Pubkey,
    pub status: CompetitionStatus,
    pub amount: u64,
}
