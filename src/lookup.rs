//! Availability Lookup
//!
//! Bookkeeping for the debounced availability check on the new-reservation
//! form. Every input change restarts a fixed-delay timer; when the timer fires
//! a lookup is started with a fresh ticket, and a response is only applied if
//! its ticket is still the latest one.

use crate::models::AvailabilityQuery;

/// Delay between the last input change and the availability request
pub const AVAILABILITY_DEBOUNCE_MS: u32 = 500;

/// Identifies one availability request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Tracks which availability request is the current one
#[derive(Debug, Default)]
pub struct AvailabilityLookup {
    generation: u64,
    last_query: Option<AvailabilityQuery>,
}

impl AvailabilityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup for `query`, superseding any in flight
    pub fn begin(&mut self, query: AvailabilityQuery) -> LookupTicket {
        self.generation += 1;
        self.last_query = Some(query);
        LookupTicket(self.generation)
    }

    /// Inputs became incomplete: drop whatever is in flight
    pub fn clear(&mut self) {
        self.generation += 1;
        self.last_query = None;
    }

    /// Whether a response carrying `ticket` should still be applied
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Whether the last lookup had all of date, time and party size
    pub fn query_complete(&self) -> bool {
        self.last_query.is_some()
    }
}

/// Placeholder shown in the table picker when there are no options
pub fn empty_options_message(query_complete: bool) -> &'static str {
    if query_complete {
        "No hay mesas disponibles para esta fecha y hora"
    } else {
        "Complete fecha, hora y número de personas primero"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn query(party_size: u32) -> AvailabilityQuery {
        AvailabilityQuery {
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            party_size,
        }
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut lookup = AvailabilityLookup::new();
        let first = lookup.begin(query(2));
        let second = lookup.begin(query(4));

        assert!(!lookup.is_current(first));
        assert!(lookup.is_current(second));
        assert!(lookup.query_complete());
    }

    #[test]
    fn test_clear_invalidates_in_flight_lookup() {
        let mut lookup = AvailabilityLookup::new();
        let ticket = lookup.begin(query(2));
        assert!(lookup.query_complete());

        lookup.clear();
        assert!(!lookup.is_current(ticket));
        assert!(!lookup.query_complete());
        assert_eq!(
            empty_options_message(lookup.query_complete()),
            "Complete fecha, hora y número de personas primero"
        );
    }

    #[test]
    fn test_empty_message_after_complete_query() {
        let mut lookup = AvailabilityLookup::new();
        lookup.begin(query(6));

        assert_eq!(
            empty_options_message(lookup.query_complete()),
            "No hay mesas disponibles para esta fecha y hora"
        );
    }
}
