/// Receives solver events as the iteration proceeds.
///
/// Observers let callers watch a solver without changing its API, for example
/// to log or record each step.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
