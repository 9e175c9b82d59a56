const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const STATE_MASK: u64 = 0x7fff_ffff;

/// Linear-congruential generator used to derive per-render parameters from
/// the user-facing seed, so the same seed always produces the same image.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Advances the state and returns it scaled into `[0, 1]`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;

        self.state as f64 / STATE_MASK as f64
    }

    /// Picks one of `choices` values using the next draw.
    pub fn next_index(&mut self, choices: usize) -> usize {
        let index = (self.next_unit() * choices as f64).floor() as usize;
        index.min(choices.saturating_sub(1))
    }
}
