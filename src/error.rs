use std::any::type_name;

use thiserror::Error;

/// No instance method with the requested name exists on the type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("undefined method `{method}` for `{type_name}`")]
pub struct MissingMethod {
    pub type_name: &'static str,
    pub method: String,
}

impl MissingMethod {
    pub fn new<T: ?Sized>(method: impl Into<String>) -> Self {
        Self {
            type_name: type_name::<T>(),
            method: method.into(),
        }
    }
}

/// Failure of a shortcut call.
///
/// `E` is the target type's construction error, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError<E> {
    /// The name was never installed as a shortcut on the type.
    #[error("`{type_name}` has no shortcut `{name}`")]
    NoShortcut { type_name: &'static str, name: String },
    #[error(transparent)]
    Construction(E),
    #[error(transparent)]
    MissingMethod(#[from] MissingMethod),
}

impl<E> FactoryError<E> {
    /// The constructor's own error, if construction is what failed.
    pub fn into_construction(self) -> Option<E> {
        match self {
            Self::Construction(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_missing_method(&self) -> bool {
        matches!(self, Self::MissingMethod(_))
    }
}
