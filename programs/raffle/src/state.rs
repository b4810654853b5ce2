use anchor_lang::prelude::*;

use crate::constants::{ENDING_WINDOW_SECS, MAX_ENTROPY_LEN, MAX_SEED_LEN};

/// Lifecycle states of a competition.
///
/// `Active` and `Ending` are the only states that admit ticket sales;
/// `Complete` and `Cancelled` are terminal and mutually exclusive.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum CompetitionStatus {
    Active,
    Ending,
    Complete,
    Cancelled,
}

#[account]
#[derive(InitSpace)]
pub struct Competition {
    /// The operator allowed to complete the draw and withdraw proceeds.
    pub authority: Pubkey,

    /// Identifier used as a PDA seed component.
    pub competition_id: u64,

    /// SPL mint tickets are priced in.
    pub credits_mint: Pubkey,

    /// Price of one ticket, in credit base units.
    pub ticket_price: u64,

    /// Total ticket capacity.
    pub total_tickets: u32,

    /// Tickets issued so far. Never decreases; ticket numbers
    /// `1..=tickets_sold` are dense with no duplicates and no gaps.
    pub tickets_sold: u32,

    /// Cap on tickets one buyer may hold in this competition.
    pub max_tickets_per_user: u16,

    /// Current lifecycle state.
    pub status: CompetitionStatus,

    /// UNIX timestamp at which sales close and the draw becomes due.
    pub ends_at: i64,

    pub created_at: i64,
    pub updated_at: i64,

    /// SHA-256 of the secret draw seed, published at creation.
    /// The plaintext seed is revealed only when the draw completes.
    pub seed_commitment: [u8; 32],

    /// The revealed seed. Empty until `status` is `Complete`.
    #[max_len(MAX_SEED_LEN)]
    pub revealed_seed: String,

    /// Hex digest of the slot hash captured after `ends_at`.
    /// Empty until entropy capture.
    #[max_len(MAX_ENTROPY_LEN)]
    pub external_entropy: String,

    /// Slot the entropy hash came from. Zero until entropy capture.
    pub entropy_slot: u64,

    /// The drawn ticket number, in `1..=tickets_sold`.
    /// Zero until `status` is `Complete`.
    pub winning_ticket: u32,

    /// Owner of the winning ticket, snapshotted at draw time.
    pub winner: Pubkey,

    pub bump: u8,
}

impl Competition {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            CompetitionStatus::Complete | CompetitionStatus::Cancelled
        )
    }

    /// Sales are admitted while the competition is `Active` or `Ending`
    /// and the end time has not passed.
    pub fn is_open_for_sales(&self, now: i64) -> bool {
        matches!(
            self.status,
            CompetitionStatus::Active | CompetitionStatus::Ending
        ) && now < self.ends_at
    }

    pub fn is_due(&self, now: i64) -> bool {
        now >= self.ends_at
    }

    pub fn in_ending_window(&self, now: i64) -> bool {
        now >= self.ends_at.saturating_sub(ENDING_WINDOW_SECS) && now < self.ends_at
    }

    pub fn entropy_captured(&self) -> bool {
        !self.external_entropy.is_empty()
    }

    pub fn capacity_allows(&self, quantity: u32) -> bool {
        quantity <= self.total_tickets.saturating_sub(self.tickets_sold)
    }

    /// Whether `quantity` more tickets fit under the per-user cap given the
    /// buyer already holds `held`. An over-cap request is rejected in full,
    /// never partially filled.
    pub fn quota_allows(&self, held: u16, quantity: u16) -> bool {
        match held.checked_add(quantity) {
            Some(total) => total <= self.max_tickets_per_user,
            None => false,
        }
    }

    /// The lifecycle transition a sweep should apply right now, if any.
    ///
    /// Completion is not decided here: a due competition with sold tickets
    /// waits for entropy capture and the operator's seed reveal.
    pub fn due_transition(&self, now: i64) -> Option<CompetitionStatus> {
        if self.is_terminal() {
            return None;
        }
        if self.is_due(now) {
            if self.tickets_sold == 0 {
                return Some(CompetitionStatus::Cancelled);
            }
            return None;
        }
        if self.status == CompetitionStatus::Active && self.in_ending_window(now) {
            return Some(CompetitionStatus::Ending);
        }
        None
    }
}

#[account]
#[derive(InitSpace)]
pub struct TicketOrder {
    /// Competition this order belongs to.
    pub competition: Pubkey,

    /// The buyer. The winner snapshot on the competition is taken from
    /// this field at draw time.
    pub buyer: Pubkey,

    /// First ticket number of the contiguous range covered by this order.
    pub first_ticket: u32,

    /// How many consecutive ticket numbers the order covers.
    pub ticket_count: u32,

    pub purchased_at: i64,

    /// Set exactly once, by the draw, on at most one order per competition.
    pub is_winner: bool,

    /// Client-supplied PDA seed component; the buyer cannot know
    /// `first_ticket` before the transaction lands.
    pub order_seed: [u8; 8],

    pub bump: u8,
}

impl TicketOrder {
    pub fn covers(&self, ticket_number: u32) -> bool {
        ticket_number >= self.first_ticket
            && ticket_number < self.first_ticket.saturating_add(self.ticket_count)
    }
}

/// Running count of tickets one buyer holds in one competition,
/// used to enforce `max_tickets_per_user`.
#[account]
#[derive(InitSpace)]
pub struct EntryCounter {
    pub competition: Pubkey,
    pub buyer: Pubkey,
    pub tickets_held: u16,
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(status: CompetitionStatus, tickets_sold: u32) -> Competition {
        Competition {
            authority: Pubkey::new_unique(),
            competition_id: 1,
            credits_mint: Pubkey::new_unique(),
            ticket_price: 100,
            total_tickets: 500,
            tickets_sold,
            max_tickets_per_user: 30,
            status,
            ends_at: 1_000_000,
            created_at: 0,
            updated_at: 0,
            seed_commitment: [0u8; 32],
            revealed_seed: String::new(),
            external_entropy: String::new(),
            entropy_slot: 0,
            winning_ticket: 0,
            winner: Pubkey::default(),
            bump: 255,
        }
    }

    #[test]
    fn sales_open_only_before_end_in_nonterminal_states() {
        let c = competition(CompetitionStatus::Active, 0);
        assert!(c.is_open_for_sales(999_999));
        assert!(!c.is_open_for_sales(1_000_000));

        let c = competition(CompetitionStatus::Ending, 10);
        assert!(c.is_open_for_sales(999_999));

        let c = competition(CompetitionStatus::Complete, 10);
        assert!(!c.is_open_for_sales(999_999));
        let c = competition(CompetitionStatus::Cancelled, 0);
        assert!(!c.is_open_for_sales(999_999));
    }

    #[test]
    fn ending_window_boundaries() {
        let c = competition(CompetitionStatus::Active, 0);
        let window_start = c.ends_at - ENDING_WINDOW_SECS;
        assert!(!c.in_ending_window(window_start - 1));
        assert!(c.in_ending_window(window_start));
        assert!(c.in_ending_window(c.ends_at - 1));
        assert!(!c.in_ending_window(c.ends_at));
    }

    #[test]
    fn sweep_promotes_active_inside_window() {
        let c = competition(CompetitionStatus::Active, 5);
        assert_eq!(
            c.due_transition(c.ends_at - 60),
            Some(CompetitionStatus::Ending)
        );
        // Before the window: nothing due.
        assert_eq!(c.due_transition(c.ends_at - ENDING_WINDOW_SECS - 1), None);
    }

    #[test]
    fn sweep_is_noop_on_already_ending() {
        let c = competition(CompetitionStatus::Ending, 5);
        assert_eq!(c.due_transition(c.ends_at - 60), None);
    }

    #[test]
    fn zero_ticket_expiry_cancels_never_completes() {
        let c = competition(CompetitionStatus::Active, 0);
        assert_eq!(
            c.due_transition(c.ends_at),
            Some(CompetitionStatus::Cancelled)
        );
        let c = competition(CompetitionStatus::Ending, 0);
        assert_eq!(
            c.due_transition(c.ends_at + 3600),
            Some(CompetitionStatus::Cancelled)
        );
    }

    #[test]
    fn due_with_sales_waits_for_the_draw() {
        let c = competition(CompetitionStatus::Ending, 123);
        assert_eq!(c.due_transition(c.ends_at), None);
    }

    #[test]
    fn terminal_states_are_inert() {
        for status in [CompetitionStatus::Complete, CompetitionStatus::Cancelled] {
            let c = competition(status, 10);
            assert_eq!(c.due_transition(c.ends_at + 1), None);
            assert!(c.is_terminal());
        }
    }

    #[test]
    fn capacity_rejects_oversold() {
        let mut c = competition(CompetitionStatus::Active, 498);
        assert!(c.capacity_allows(2));
        assert!(!c.capacity_allows(3));
        c.tickets_sold = 500;
        assert!(!c.capacity_allows(1));
    }

    #[test]
    fn quota_boundary_is_exact_and_all_or_nothing() {
        let c = competition(CompetitionStatus::Active, 0);
        // Holder of cap-1 tickets may buy exactly one more.
        assert!(c.quota_allows(29, 1));
        // A request for two is rejected in full.
        assert!(!c.quota_allows(29, 2));
        assert!(!c.quota_allows(30, 1));
        assert!(c.quota_allows(0, 30));
    }

    #[test]
    fn order_covers_its_range_only() {
        let order = TicketOrder {
            competition: Pubkey::new_unique(),
            buyer: Pubkey::new_unique(),
            first_ticket: 11,
            ticket_count: 5,
            purchased_at: 0,
            is_winner: false,
            order_seed: [0u8; 8],
            bump: 255,
        };
        assert!(!order.covers(10));
        assert!(order.covers(11));
        assert!(order.covers(15));
        assert!(!order.covers(16));
    }
}
