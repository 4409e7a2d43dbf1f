use std::time::Duration;

/// Converts host frame time into a whole number of fixed steps.
///
/// Hosts that cannot deliver an exact 16 ms timer (a render loop, say) feed
/// elapsed time in and run `steps` sequentially. Leftover time carries over
/// to the next frame.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: Duration,
    accumulated: Duration,
}

impl FixedStepClock {
    /// At most `MAX_STEPS` are due per call, so a stalled host does not
    /// replay a long gap.
    pub const MAX_STEPS: u32 = 8;

    pub fn new(step: Duration) -> Self {
        Self { step, accumulated: Duration::ZERO }
    }

    /// Add elapsed host time; returns how many steps are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.step && due < Self::MAX_STEPS {
            self.accumulated -= self.step;
            due += 1;
        }
        if due == Self::MAX_STEPS {
            // drop the backlog instead of spiralling
            self.accumulated = Duration::ZERO;
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder() {
        let mut clock = FixedStepClock::new(Duration::from_millis(16));
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(clock.advance(Duration::from_millis(28)), 2);
    }

    #[test]
    fn backlog_capped() {
        let mut clock = FixedStepClock::new(Duration::from_millis(16));
        assert_eq!(clock.advance(Duration::from_secs(5)), FixedStepClock::MAX_STEPS);
        assert_eq!(clock.advance(Duration::from_millis(1)), 0);
    }
}
