/// Control actions supported by the trajectory sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop sampling and return the samples recorded so far.
    StopEarly,
}
