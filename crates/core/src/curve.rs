use uom::si::f64::Time;

/// A progress curve mapping elapsed time to a normalized proportion.
///
/// A proportion of `0.0` means "at the start value" and `1.0` means "at the
/// target value". Curves may overshoot either bound transiently, which is how
/// a spring oscillates around its target before settling.
///
/// Implementations must be pure: evaluating the same `elapsed` twice yields
/// the same result.
///
/// Closures of the form `Fn(Time) -> f64` implement `Curve`, which is handy
/// for driving a sampler with a hand-built curve.
pub trait Curve {
    /// Returns the progress proportion at `elapsed` time since the start.
    fn proportion(&self, elapsed: Time) -> f64;
}

impl<F> Curve for F
where
    F: Fn(Time) -> f64,
{
    fn proportion(&self, elapsed: Time) -> f64 {
        self(elapsed)
    }
}
