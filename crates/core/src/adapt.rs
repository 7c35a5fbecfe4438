use crate::model::{AnswerEvent, Level};

//
// ─── LEVEL SHIFT ───────────────────────────────────────────────────────────────
//

/// Outcome of evaluating the streak window after a new answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelShift {
    /// Two correct answers in a row: move one level up.
    Up,
    /// Two wrong answers in a row: move one level down.
    Down,
    /// Mixed outcomes, or fewer than two answers so far.
    Hold,
}

impl LevelShift {
    /// Apply this shift to a level, saturating at the extremes.
    #[must_use]
    pub fn apply(self, level: Level) -> Level {
        match self {
            LevelShift::Up => level.step_up(),
            LevelShift::Down => level.step_down(),
            LevelShift::Hold => level,
        }
    }
}

//
// ─── STREAK POLICY ─────────────────────────────────────────────────────────────
//

/// Evaluate the streak window over the session's chronological answer log.
///
/// Only the two most recent events matter, and deliberately regardless of
/// which level each was answered at: the policy reacts to the latest
/// performance trend, not to per-level history. With fewer than two events
/// the result is always `Hold`.
#[must_use]
pub fn shift_for(events: &[AnswerEvent]) -> LevelShift {
    let [.., previous, latest] = events else {
        return LevelShift::Hold;
    };

    match (previous.correct, latest.correct) {
        (true, true) => LevelShift::Up,
        (false, false) => LevelShift::Down,
        _ => LevelShift::Hold,
    }
}

/// Convenience: the level after appending the latest event to `events`.
#[must_use]
pub fn next_level(current: Level, events: &[AnswerEvent]) -> Level {
    shift_for(events).apply(current)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fundamental, QuestionId};
    use crate::time::fixed_now;

    fn event(correct: bool) -> AnswerEvent {
        AnswerEvent::new(QuestionId::new(1), correct, Fundamental::Grasping, fixed_now())
    }

    #[test]
    fn single_event_holds() {
        assert_eq!(shift_for(&[event(true)]), LevelShift::Hold);
        assert_eq!(shift_for(&[event(false)]), LevelShift::Hold);
        assert_eq!(shift_for(&[]), LevelShift::Hold);
    }

    #[test]
    fn two_correct_shift_up() {
        let events = [event(true), event(true)];
        assert_eq!(shift_for(&events), LevelShift::Up);
        assert_eq!(next_level(Level::Easy, &events), Level::Medium);
        assert_eq!(next_level(Level::Medium, &events), Level::Hard);
        assert_eq!(next_level(Level::Hard, &events), Level::Hard);
    }

    #[test]
    fn two_wrong_shift_down() {
        let events = [event(false), event(false)];
        assert_eq!(shift_for(&events), LevelShift::Down);
        assert_eq!(next_level(Level::Hard, &events), Level::Medium);
        assert_eq!(next_level(Level::Medium, &events), Level::Easy);
        assert_eq!(next_level(Level::Easy, &events), Level::Easy);
    }

    #[test]
    fn mixed_outcomes_hold() {
        for pair in [[event(true), event(false)], [event(false), event(true)]] {
            assert_eq!(shift_for(&pair), LevelShift::Hold);
            assert_eq!(next_level(Level::Medium, &pair), Level::Medium);
        }
    }

    #[test]
    fn only_last_two_events_matter() {
        // Older history is ignored even when it contradicts the window.
        let events = [event(false), event(false), event(true), event(true)];
        assert_eq!(shift_for(&events), LevelShift::Up);
    }
}
