extern crate proc_macro;

mod construct;
mod factory;

use proc_macro::TokenStream;

/// Gives a struct a positional constructor and implements `Construct` with it.
///
/// The constructor is called `new` and takes every field in declaration
/// order. Rename it with `#[ctor_name = "new_name"]` on the struct, and
/// rename a field's parameter with `#[ctor_rename = "name"]` on the field.
/// `Construct::Args` is the tuple of field types and construction never fails.
#[proc_macro_derive(Construct, attributes(ctor_name, ctor_rename))]
pub fn derive_construct(input: TokenStream) -> TokenStream {
    construct::derive_construct(input)
}

/// Installs constructor shortcuts on the type of an inherent `impl` block.
///
/// `#[simple_factory(say, naysay)]` makes `T::shortcut("say", args)` build
/// a `T` from `args` and call its `say` method.
///
/// Every method of the block that takes only `self`, `&self` or `&mut self`
/// and returns the shortcut output type is dispatched by name, listed or not,
/// so a later `T::install(["other"])` reaches it. The output type is the
/// return type of the listed methods found in the block (they must agree),
/// or `output = Type`, or `()`. Methods from other `impl` blocks are added
/// with `dispatch = [name, ...]`. A listed name with no method behind it
/// still installs a shortcut, which fails with `MissingMethod` when called.
///
/// The type must be `'static` and implement `Construct`. For a generic
/// block such as `impl<T> Shared<T>` that means bounding `T: 'static`.
#[proc_macro_attribute]
pub fn simple_factory(args: TokenStream, input: TokenStream) -> TokenStream {
    factory::expand(args, input)
}
