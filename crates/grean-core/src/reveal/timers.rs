//! # Timer Table
//!
//! Ordered set of pending timers for one sequencer.
//!
//! Timers are keyed by `(due, sequence)` so that two timers due at the same
//! instant fire in the order they were scheduled. Each [`TimerId`] is pending
//! at most once; scheduling it again replaces the earlier registration.

use super::machine::TimerId;
use crate::Millis;
use std::collections::BTreeMap;

/// A timer popped from the table because it came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub due: Millis,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    due: Millis,
    seq: u64,
    period: Option<Millis>,
}

/// Pending timers, ordered by due time.
#[derive(Debug, Clone, Default)]
pub struct TimerTable {
    queue: BTreeMap<(Millis, u64), TimerId>,
    index: BTreeMap<TimerId, Registration>,
    next_seq: u64,
}

impl TimerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` to fire `delay` after `now`, repeating every `delay` if
    /// `repeat` is set.
    pub fn schedule(&mut self, id: TimerId, now: Millis, delay: Millis, repeat: bool) {
        self.cancel(id);
        let period = repeat.then_some(delay);
        self.insert(id, now.saturating_add(delay), period);
    }

    /// Revoke `id`. Returns `false` if it was not pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(reg) => {
                self.queue.remove(&(reg.due, reg.seq));
                true
            }
            None => false,
        }
    }

    /// Revoke every pending timer.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// A repeating timer is re-registered one period after its due time
    /// before it is returned, so a handler can still cancel it.
    pub fn pop_due(&mut self, now: Millis) -> Option<FiredTimer> {
        let (&(due, seq), &id) = self.queue.iter().next()?;
        if due > now {
            return None;
        }
        self.queue.remove(&(due, seq));
        let period = self.index.remove(&id).and_then(|reg| reg.period);

        if let Some(period) = period {
            self.insert(id, due.saturating_add(period), Some(period));
        }

        Some(FiredTimer { id, due })
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Pending timers in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (TimerId, Millis)> + '_ {
        self.queue.iter().map(|(&(due, _), &id)| (id, due))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn insert(&mut self, id: TimerId, due: Millis, period: Option<Millis>) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        self.queue.insert((due, seq), id);
        self.index.insert(id, Registration { due, seq, period });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::Settle, Millis(0), Millis(500), false);
        table.schedule(TimerId::ContentDelay, Millis(0), Millis(100), false);

        assert_eq!(table.next_due(), Some(Millis(100)));
        let first = table.pop_due(Millis(1000));
        assert_eq!(first.map(|f| f.id), Some(TimerId::ContentDelay));
        let second = table.pop_due(Millis(1000));
        assert_eq!(second.map(|f| f.id), Some(TimerId::Settle));
        assert!(table.is_empty());
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::LabelDelay, Millis(0), Millis(500), false);
        table.schedule(TimerId::Settle, Millis(0), Millis(500), false);

        assert_eq!(
            table.pop_due(Millis(500)).map(|f| f.id),
            Some(TimerId::LabelDelay)
        );
        assert_eq!(table.pop_due(Millis(500)).map(|f| f.id), Some(TimerId::Settle));
    }

    #[test]
    fn not_due_yet() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::Settle, Millis(0), Millis(500), false);
        assert!(table.pop_due(Millis(499)).is_none());
        assert!(table.is_pending(TimerId::Settle));
    }

    #[test]
    fn repeating_timer_reschedules_from_due_time() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::ProgressTick, Millis(0), Millis(200), true);

        let fired = table.pop_due(Millis(250));
        assert_eq!(
            fired,
            Some(FiredTimer {
                id: TimerId::ProgressTick,
                due: Millis(200)
            })
        );
        assert_eq!(table.next_due(), Some(Millis(400)));
    }

    #[test]
    fn cancel_removes_repeating_timer() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::ProgressTick, Millis(0), Millis(200), true);
        let _ = table.pop_due(Millis(200));
        assert!(table.cancel(TimerId::ProgressTick));
        assert!(!table.cancel(TimerId::ProgressTick));
        assert_eq!(table.next_due(), None);
    }

    #[test]
    fn reschedule_replaces_previous_registration() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::Settle, Millis(0), Millis(500), false);
        table.schedule(TimerId::Settle, Millis(100), Millis(500), false);
        assert_eq!(table.len(), 1);
        assert_eq!(table.next_due(), Some(Millis(600)));
    }

    #[test]
    fn cancel_all_empties_table() {
        let mut table = TimerTable::new();
        for id in TimerId::ALL {
            table.schedule(id, Millis(0), Millis(10), false);
        }
        assert_eq!(table.len(), 4);
        table.cancel_all();
        assert!(table.is_empty());
        assert_eq!(table.pending().count(), 0);
    }
}
