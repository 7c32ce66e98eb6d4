//! Type-level constructor shortcuts.
//!
//! `Foo::shortcut("say", args)` is sugar for `Foo::new(args).say()`.
//!
//! ```
//! use simple_factory::{simple_factory, Construct, SimpleFactory};
//!
//! #[derive(Construct)]
//! struct Foo {
//!     bar: String,
//!     baz: String,
//! }
//!
//! #[simple_factory(say, naysay)]
//! impl Foo {
//!     fn say(&self) -> String {
//!         format!("{} and {}", self.bar, self.baz)
//!     }
//!
//!     fn naysay(&self) -> String {
//!         format!("neither {} nor {}", self.bar, self.baz)
//!     }
//! }
//!
//! let said = Foo::shortcut("say", ("this".into(), "that".into())).unwrap();
//! assert_eq!(said, "this and that");
//! ```
extern crate self as simple_factory;

mod construct;
mod error;
mod factory;
mod registry;
mod respond;

pub use construct::Construct;
pub use error::{FactoryError, MissingMethod};
pub use factory::{install, Shortcut, ShortcutResult, SimpleFactory};
pub use macros::{simple_factory, Construct};
pub use registry::Shortcuts;
pub use respond::Respond;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
