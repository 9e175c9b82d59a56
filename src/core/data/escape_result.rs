/// Outcome of iterating a single plane point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    /// Fractional escape estimate. Equals `iterations` when the point never
    /// escaped.
    pub smooth: f64,
    /// Index of the root a Newton iteration settled on. `None` for every
    /// escape-time variant.
    pub root: Option<usize>,
}

impl EscapeResult {
    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            smooth: f64::from(max_iterations),
            root: None,
        }
    }

    #[must_use]
    pub fn converged(iterations: u32, root: usize) -> Self {
        Self {
            iterations,
            smooth: f64::from(iterations),
            root: Some(root),
        }
    }

    /// True when an escape-time iteration ran out of budget without escaping.
    #[must_use]
    pub fn is_in_set(&self, max_iterations: u32) -> bool {
        self.root.is_none() && self.iterations >= max_iterations
    }
}
