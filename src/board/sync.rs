//! Guards against stale persistence responses.
//!
//! Every mutation takes a ticket for the entity it touches. When its
//! response arrives, the response is applied only if no newer mutation on
//! the same entity was started in the meantime.

use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

/// Ticket identifying one in-flight mutation on one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteTicket<K> {
    key: K,
    sequence: u64,
}

impl<K: Copy> WriteTicket<K> {
    /// Returns the entity key.
    #[must_use]
    pub const fn key(&self) -> K {
        self.key
    }

    /// Returns the global sequence number of the mutation.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Tracks the latest mutation started per entity.
#[derive(Debug)]
pub struct ResponseGate<K> {
    next_sequence: u64,
    latest: HashMap<K, u64>,
}

impl<K> Default for ResponseGate<K> {
    fn default() -> Self {
        Self {
            next_sequence: 0,
            latest: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ResponseGate<K> {
    /// Creates a gate with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new mutation on `key`, superseding earlier ones.
    pub fn begin(&mut self, key: K) -> WriteTicket<K> {
        self.next_sequence += 1;
        self.latest.insert(key, self.next_sequence);
        WriteTicket {
            key,
            sequence: self.next_sequence,
        }
    }

    /// Returns `true` when `ticket` is still the newest mutation on its
    /// entity.
    #[must_use]
    pub fn is_current(&self, ticket: &WriteTicket<K>) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.sequence)
    }

    /// Completes a mutation. Returns `true` when its response should be
    /// applied and `false` when a newer mutation superseded it.
    pub fn complete(&mut self, ticket: &WriteTicket<K>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "discarding stale response for mutation {}",
                ticket.sequence
            );
            return false;
        }
        self.latest.remove(&ticket.key);
        true
    }

    /// Returns how many entities have a mutation in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.latest.len()
    }
}
