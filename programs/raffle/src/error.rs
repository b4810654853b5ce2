use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Total ticket capacity must be greater than zero")]
    InvalidCapacity,
    #[msg("Per-user ticket cap must be greater than zero")]
    InvalidUserCap,
    #[msg("End time must be in the future")]
    InvalidEndTime,
    #[msg("Quantity must be at least one ticket")]
    InvalidQuantity,
    #[msg("Competition is not open for ticket sales")]
    CompetitionNotOpen,
    #[msg("Ticket sales have closed for this competition")]
    SalesClosed,
    #[msg("Not enough tickets remaining")]
    CapacityExceeded,
    #[msg("Purchase would exceed the per-user ticket cap")]
    UserQuotaExceeded,
    #[msg("Competition has not reached its end time")]
    CompetitionNotEnded,
    #[msg("Competition is already complete or cancelled")]
    CompetitionClosed,
    #[msg("Competition has sold tickets and cannot be cancelled")]
    TicketsOutstanding,
    #[msg("No tickets were sold for this competition")]
    NoTicketsSold,
    #[msg("External entropy has already been captured")]
    EntropyAlreadyCaptured,
    #[msg("External entropy has not been captured yet")]
    EntropyNotCaptured,
    #[msg("Slot hashes sysvar held no usable entropy")]
    EntropyUnavailable,
    #[msg("Revealed seed does not match the published commitment")]
    SeedCommitmentMismatch,
    #[msg("Seed exceeds the maximum length")]
    SeedTooLong,
    #[msg("Ticket count must be at least one")]
    InvalidTicketCount,
    #[msg("Winning ticket number not found among issued tickets")]
    WinningTicketNotFound,
    #[msg("Draw verification failed: recomputed winner does not match claim")]
    VerificationFailed,
    #[msg("Caller is not the competition authority")]
    Unauthorized,
    #[msg("Numerical overflow")]
    NumericalOverflow,
}
