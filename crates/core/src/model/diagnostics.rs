use crate::model::fundamental::Fundamental;

/// Per-fundamental mistake counters for one session.
///
/// Exactly four counters, one per fundamental, all starting at zero. They
/// only ever move on a wrong answer, and only upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounters {
    listening: u32,
    grasping: u32,
    retention: u32,
    application: u32,
}

impl DiagnosticCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all four counters (session start).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one wrong answer against the given fundamental.
    pub fn record_miss(&mut self, fundamental: Fundamental) {
        let slot = self.slot_mut(fundamental);
        *slot = slot.saturating_add(1);
    }

    /// Mistake count for one fundamental.
    #[must_use]
    pub fn count(&self, fundamental: Fundamental) -> u32 {
        match fundamental {
            Fundamental::Listening => self.listening,
            Fundamental::Grasping => self.grasping,
            Fundamental::Retention => self.retention,
            Fundamental::Application => self.application,
        }
    }

    /// Total mistakes across all fundamentals.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.listening + self.grasping + self.retention + self.application
    }

    /// Immutable copy of the current counters.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// (fundamental, count) pairs in the fixed enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Fundamental, u32)> + '_ {
        Fundamental::ALL.into_iter().map(|f| (f, self.count(f)))
    }

    fn slot_mut(&mut self, fundamental: Fundamental) -> &mut u32 {
        match fundamental {
            Fundamental::Listening => &mut self.listening,
            Fundamental::Grasping => &mut self.grasping,
            Fundamental::Retention => &mut self.retention,
            Fundamental::Application => &mut self.application,
        }
    }
}
