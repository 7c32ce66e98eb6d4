//! Type-level constructor shortcuts.

use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;

use crate::construct::Construct;
use crate::error::FactoryError;
use crate::registry;
use crate::respond::Respond;

/// Result of calling a shortcut on `T`.
pub type ShortcutResult<T> =
    Result<<T as Respond>::Output, FactoryError<<T as Construct>::Error>>;

/// Constructor shortcuts attached to the type itself.
///
/// Calling shortcut `name` with arguments `args` builds a fresh instance
/// with [`Construct::construct`] and hands it to [`Respond::respond`], so
/// `T::shortcut("say", args)` behaves exactly like
/// `T::construct(args)?.respond("say")`.
///
/// Whether the instance method exists is only checked when a shortcut is
/// called. Installing a name never fails.
pub trait SimpleFactory: Construct + Respond + 'static {
    /// Shortcuts attached when the type is defined.
    const SHORTCUTS: &'static [&'static str] = &[];

    /// Attaches one shortcut per name. Names already present are left as
    /// they are, and an empty list changes nothing.
    fn install<I, S>(names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        registry::install(
            TypeId::of::<Self>(),
            type_name::<Self>(),
            Self::SHORTCUTS,
            names,
        );
    }

    fn responds_to_shortcut(name: &str) -> bool {
        registry::contains(TypeId::of::<Self>(), Self::SHORTCUTS, name)
    }

    /// Installed shortcut names in installation order.
    fn shortcuts() -> Vec<String> {
        registry::snapshot(TypeId::of::<Self>(), Self::SHORTCUTS).into()
    }

    fn shortcut(name: &str, args: Self::Args) -> ShortcutResult<Self> {
        if !Self::responds_to_shortcut(name) {
            return Err(FactoryError::NoShortcut {
                type_name: type_name::<Self>(),
                name: name.to_owned(),
            });
        }
        let instance = Self::construct(args).map_err(FactoryError::Construction)?;
        Ok(instance.respond(name)?)
    }

    /// The shortcut `name` as a value that can be stored and called later.
    fn shortcut_fn(name: impl Into<String>) -> Shortcut<Self> {
        Shortcut::new(name)
    }
}

/// Installs `names` as shortcuts on `T`.
pub fn install<T, I, S>(names: I)
where
    T: SimpleFactory,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    T::install(names)
}

/// A shortcut bound to its name.
pub struct Shortcut<T> {
    name: String,
    _target: PhantomData<fn() -> T>,
}

impl<T: SimpleFactory> Shortcut<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _target: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: T::Args) -> ShortcutResult<T> {
        T::shortcut(&self.name, args)
    }
}

impl<T> Clone for Shortcut<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Shortcut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("target", &type_name::<T>())
            .field("name", &self.name)
            .finish()
    }
}
