//! Positional construction.

/// A type that can be built from one bundle of positional arguments.
///
/// `Args` is usually a tuple of the constructor's parameters, so
/// `Foo::new(bar, baz)` corresponds to `Foo::construct((bar, baz))`.
/// `#[derive(Construct)]` implements this for plain structs; types whose
/// constructor can reject its arguments implement it by hand and report
/// the rejection through `Error`.
pub trait Construct: Sized {
    type Args;
    type Error;

    fn construct(args: Self::Args) -> Result<Self, Self::Error>;
}
