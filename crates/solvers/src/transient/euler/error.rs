use thiserror::Error;

/// Errors that can occur during Euler integration.
///
/// Generic over the model error `ME` and the problem error `PE`, so with an
/// infallible model and problem only [`Error::History`] remains.
#[derive(Debug, Error)]
pub enum Error<ME, PE> {
    /// The model call failed.
    #[error("model error: {0}")]
    Model(#[source] ME),

    /// Extracting the state, computing the derivative, or rebuilding the input failed.
    #[error("problem error: {0}")]
    Problem(#[source] PE),

    /// The history for the requested number of steps could not be allocated.
    #[error("cannot allocate a history of {steps} steps")]
    History { steps: usize },
}
