//! `EventQueue`, the future event list.
//!
//! Events are keyed by `(SimTime, EventSeq)`.  The sequence number is a
//! per-queue insertion counter, so two events with the same timestamp come
//! out in the order they went in.  Tie-breaking never depends on event
//! contents or memory layout, which keeps seeded runs reproducible.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log E) push and pop where E is the number of pending
//! events.  A full default run keeps at most a few hundred events queued
//! (every arrival is scheduled up front), so the constant is tiny.

use std::collections::BTreeMap;

use dts_core::{EventSeq, SimTime};

use crate::Event;

/// Min-priority queue of pending events ordered by time, then insertion.
#[derive(Default)]
pub struct EventQueue {
    inner:    BTreeMap<(SimTime, EventSeq), Event>,
    next_seq: EventSeq,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` at its own timestamp and return its tie-break sequence.
    ///
    /// No check is made against the current clock: callers may insert events
    /// in any timestamp order.
    pub fn push(&mut self, event: Event) -> EventSeq {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.inner.insert((event.at, seq), event);
        seq
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.inner.pop_first().map(|(_, event)| event)
    }

    /// Timestamp of the earliest pending event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(at, _)| at)
    }

    /// Borrow the earliest pending event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.inner.values().next()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of events ever pushed.
    pub fn pushed(&self) -> u64 {
        self.next_seq.0
    }
}
