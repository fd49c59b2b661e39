use thiserror::Error;

/// Failures surfaced by imperative calls on a scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// No scrollable instance is recorded: the scroller was never
    /// committed, or it has been unmounted.
    #[error("scroll component is not mounted")]
    NotMounted,
}
