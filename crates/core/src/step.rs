/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets generic ODE solvers advance the type by
/// `derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For the epidemic models `Delta` is a step in days.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
