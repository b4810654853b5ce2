pub const COMPETITION_SEED: &[u8] = b"competition";
pub const TICKET_ORDER_SEED: &[u8] = b"ticket_order";
pub const ENTRY_COUNTER_SEED: &[u8] = b"entries";

/// Per-user ticket cap applied when the operator does not supply one.
pub const DEFAULT_MAX_TICKETS_PER_USER: u16 = 30;

/// How long before `ends_at` a competition is promoted to `Ending`.
pub const ENDING_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Upper bound on the revealed seed string, in bytes.
pub const MAX_SEED_LEN: usize = 64;

/// External entropy is stored as the 64-char hex digest of a slot hash.
pub const MAX_ENTROPY_LEN: usize = 64;
