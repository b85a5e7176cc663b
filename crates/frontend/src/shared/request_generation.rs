//! Ordering guard for requests whose answers can overtake each other.
//!
//! Each new request takes a ticket; only the answer carrying the latest
//! ticket may be applied.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestGeneration(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGeneration {
    /// Starts a new generation, invalidating every ticket handed out so far.
    pub fn advance(&mut self) -> RequestTicket {
        self.0 = self.0.wrapping_add(1);
        RequestTicket(self.0)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.0 == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut generation = RequestGeneration::default();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_advance_without_request_invalidates() {
        let mut generation = RequestGeneration::default();
        let ticket = generation.advance();
        generation.advance();
        assert!(!generation.is_current(ticket));
    }
}
