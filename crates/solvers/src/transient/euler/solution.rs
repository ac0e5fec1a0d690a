use epi_core::Snapshot;

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Snapshots from each step, starting with the initial state.
    pub history: Vec<Snapshot<I, O>>,
}

impl<I, O> Solution<I, O> {
    /// Returns the model inputs in step order.
    pub fn inputs(&self) -> impl ExactSizeIterator<Item = &I> {
        self.history.iter().map(|snapshot| &snapshot.input)
    }
}
