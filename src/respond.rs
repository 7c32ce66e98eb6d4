use crate::error::MissingMethod;

/// Name-keyed dispatch onto zero-argument instance methods.
///
/// The instance is consumed: shortcuts always respond on a value they
/// have just constructed and never hand it back. `#[simple_factory]`
/// generates this impl from the methods of an inherent `impl` block.
pub trait Respond: Sized {
    type Output;

    /// Invokes the instance method called `method`.
    fn respond(self, method: &str) -> Result<Self::Output, MissingMethod>;

    /// Whether `respond` knows a method called `method`. Must agree with
    /// `respond`.
    fn responds_to(method: &str) -> bool;
}
