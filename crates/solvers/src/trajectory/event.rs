use uom::si::f64::Time;

/// Event emitted by the sampler once per clock read.
///
/// Iteration 0 is the first read, taken right after the clock starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration number (0 for the first read).
    pub iter: usize,

    /// Elapsed time reported by the clock.
    pub elapsed: Time,

    /// Curve proportion at `elapsed`.
    pub proportion: f64,

    /// Interpolated and rounded value.
    pub value: f64,

    /// Index the value was recorded at, or `None` if it repeated the
    /// previously recorded value.
    pub recorded: Option<usize>,

    /// Target hits counted so far, including this one.
    pub periods: usize,
}
