/// Phases of the merchant's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzlePhase {
    /// Waiting for the trigger item.
    Inactive,
    /// Scale on screen, +/- buttons live.
    Active,
    /// Target matched. Terminal.
    Solved,
}

/// What an `adjust` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// The puzzle was not active, or `delta` was not a single step; nothing changed.
    Ignored,
    /// Weight moved (or stayed pinned at a bound).
    Adjusted { weight: i32 },
    /// This adjustment hit the target and solved the puzzle.
    Solved { weight: i32 },
}

/// Snapshot of the puzzle for the renderer and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniGameState {
    pub phase: PuzzlePhase,
    pub current_weight: i32,
    pub target_weight: i32,
    pub step: i32,
}

impl MiniGameState {
    pub fn is_active(&self) -> bool {
        self.phase == PuzzlePhase::Active
    }
}

/// Weight-matching puzzle: nudge the scale by `step` until it reads `target`.
///
/// `0 <= weight <= target` always holds. Every transition checks the phase
/// first and degrades to a no-op, so redundant clicks are harmless.
#[derive(Debug, Clone)]
pub struct WeightPuzzle {
    phase: PuzzlePhase,
    weight: i32,
    target: i32,
    step: i32,
}

impl WeightPuzzle {
    pub const DEFAULT_TARGET: i32 = 100;
    pub const DEFAULT_STEP: i32 = 5;

    /// `target` and `step` are expected to be positive (the manifest enforces it).
    pub fn new(target: i32, step: i32) -> Self {
        Self {
            phase: PuzzlePhase::Inactive,
            weight: 0,
            target: target.max(1),
            step: step.max(1),
        }
    }

    /// Inactive -> Active, resetting the weight. Returns false if already
    /// active or solved.
    pub fn start(&mut self) -> bool {
        if self.phase != PuzzlePhase::Inactive {
            return false;
        }
        self.phase = PuzzlePhase::Active;
        self.weight = 0;
        true
    }

    /// Move the weight by one step (`delta` must be `+step` or `-step`),
    /// saturating at `0` and `target`. Any other delta is ignored.
    /// Landing on the target solves the puzzle, including via a clamped step.
    pub fn adjust(&mut self, delta: i32) -> AdjustOutcome {
        if self.phase != PuzzlePhase::Active || (delta != self.step && delta != -self.step) {
            return AdjustOutcome::Ignored;
        }

        self.weight = (self.weight + delta).clamp(0, self.target);

        if self.weight == self.target {
            self.phase = PuzzlePhase::Solved;
            AdjustOutcome::Solved { weight: self.weight }
        } else {
            AdjustOutcome::Adjusted { weight: self.weight }
        }
    }

    pub fn increase(&mut self) -> AdjustOutcome {
        self.adjust(self.step)
    }

    pub fn decrease(&mut self) -> AdjustOutcome {
        self.adjust(-self.step)
    }

    pub fn state(&self) -> MiniGameState {
        MiniGameState {
            phase: self.phase,
            current_weight: self.weight,
            target_weight: self.target,
            step: self.step,
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn is_active(&self) -> bool {
        self.phase == PuzzlePhase::Active
    }

    pub fn is_solved(&self) -> bool {
        self.phase == PuzzlePhase::Solved
    }
}

impl Default for WeightPuzzle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET, Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn adjust_before_start_is_ignored() {
        let mut p = WeightPuzzle::default();
        assert_eq!(p.increase(), AdjustOutcome::Ignored);
        assert_eq!(p.weight(), 0);
        assert_eq!(p.phase(), PuzzlePhase::Inactive);
    }

    #[test]
    fn twenty_increments_solve() {
        let mut p = WeightPuzzle::default();
        assert!(p.start());
        for i in 1..20 {
            assert_eq!(p.increase(), AdjustOutcome::Adjusted { weight: i * 5 });
        }
        assert_eq!(p.increase(), AdjustOutcome::Solved { weight: 100 });
        assert!(p.is_solved());

        assert_eq!(p.increase(), AdjustOutcome::Ignored);
        assert_eq!(p.weight(), 100);
        assert!(!p.is_active());
    }

    #[test]
    fn decrease_at_zero_stays_at_zero() {
        let mut p = WeightPuzzle::default();
        p.start();
        assert_eq!(p.decrease(), AdjustOutcome::Adjusted { weight: 0 });
        assert!(p.is_active());
    }

    #[test]
    fn start_is_one_shot() {
        let mut p = WeightPuzzle::default();
        assert!(p.start());
        p.increase();
        assert!(!p.start());
        assert_eq!(p.weight(), 5);
    }

    #[test]
    fn partial_final_step_lands_on_target() {
        let mut p = WeightPuzzle::new(12, 5);
        p.start();
        p.increase();
        p.increase();
        assert_eq!(p.increase(), AdjustOutcome::Solved { weight: 12 });
    }

    #[test]
    fn off_step_delta_is_ignored() {
        let mut p = WeightPuzzle::default();
        p.start();
        assert_eq!(p.adjust(3), AdjustOutcome::Ignored);
        assert_eq!(p.adjust(100), AdjustOutcome::Ignored);
        assert_eq!(p.adjust(0), AdjustOutcome::Ignored);
        assert_eq!(p.adjust(i32::MIN), AdjustOutcome::Ignored);
        assert_eq!(p.weight(), 0);
        assert!(p.is_active());

        assert_eq!(p.adjust(5), AdjustOutcome::Adjusted { weight: 5 });
        assert_eq!(p.adjust(-5), AdjustOutcome::Adjusted { weight: 0 });
    }

    proptest! {
        #[test]
        fn weight_stays_in_bounds(ups in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut p = WeightPuzzle::default();
            p.start();
            let mut solved = 0;
            for up in ups {
                let outcome = if up { p.increase() } else { p.decrease() };
                if matches!(outcome, AdjustOutcome::Solved { .. }) {
                    solved += 1;
                }
                prop_assert!((0..=100).contains(&p.weight()));
                prop_assert_eq!(p.weight() % 5, 0);
            }
            prop_assert!(solved <= 1);
            prop_assert_eq!(solved == 1, p.is_solved());
            if p.is_solved() {
                prop_assert_eq!(p.weight(), 100);
            }
        }

        #[test]
        fn inactive_puzzle_never_moves(deltas in prop::collection::vec(-50i32..50, 0..50)) {
            let mut p = WeightPuzzle::default();
            for delta in deltas {
                prop_assert_eq!(p.adjust(delta), AdjustOutcome::Ignored);
            }
            prop_assert_eq!(p.weight(), 0);
        }
    }
}
