//! Process-wide record of the shortcuts installed on each type.

use std::any::TypeId;
use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Ordered set of shortcut names. Insertion order is kept and a name
/// appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortcuts {
    names: Vec<String>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` was not present before.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Shortcuts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut shortcuts = Self::new();
        shortcuts.extend(iter);
        shortcuts
    }
}

impl<S: Into<String>> Extend<S> for Shortcuts {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl From<Shortcuts> for Vec<String> {
    fn from(shortcuts: Shortcuts) -> Self {
        shortcuts.names
    }
}

/// Types are only entered once something is installed at runtime. Until
/// then a type's shortcuts are exactly the ones it declares.
fn registry() -> &'static RwLock<FxHashMap<TypeId, Shortcuts>> {
    static REGISTRY: OnceLock<RwLock<FxHashMap<TypeId, Shortcuts>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Attaches `names` to the type, seeding its entry with `declared` first.
/// Returns how many names were new.
pub(crate) fn install<I, S>(
    type_id: TypeId,
    type_name: &'static str,
    declared: &[&str],
    names: I,
) -> usize
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names = names.into_iter().peekable();
    if names.peek().is_none() {
        return 0;
    }

    let mut registry = registry().write();
    let shortcuts = registry
        .entry(type_id)
        .or_insert_with(|| declared.iter().copied().collect());

    let mut added = 0;
    for name in names {
        let name = name.into();
        if shortcuts.insert(name.as_str()) {
            trace!(target_type = type_name, shortcut = %name, "shortcut installed");
            added += 1;
        }
    }
    debug!(
        target_type = type_name,
        added,
        total = shortcuts.len(),
        "installed shortcuts"
    );
    added
}

pub(crate) fn contains(type_id: TypeId, declared: &[&str], name: &str) -> bool {
    match registry().read().get(&type_id) {
        Some(shortcuts) => shortcuts.contains(name),
        None => declared.contains(&name),
    }
}

pub(crate) fn snapshot(type_id: TypeId, declared: &[&str]) -> Shortcuts {
    match registry().read().get(&type_id) {
        Some(shortcuts) => shortcuts.clone(),
        None => declared.iter().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position() {
        let mut shortcuts = Shortcuts::new();
        assert!(shortcuts.insert("say"));
        assert!(shortcuts.insert("naysay"));
        assert!(!shortcuts.insert("say"));
        assert_eq!(shortcuts.iter().collect::<Vec<_>>(), ["say", "naysay"]);
    }

    #[test]
    fn collect_drops_duplicates() {
        let shortcuts: Shortcuts = ["a", "b", "a", "c", "b"].into_iter().collect();
        assert_eq!(shortcuts.len(), 3);
        assert!(shortcuts.contains("c"));
        assert!(!shortcuts.contains("d"));
    }

    #[test]
    fn declared_names_seed_the_entry() {
        struct Marker;
        let id = TypeId::of::<Marker>();

        assert!(contains(id, &["first"], "first"));
        assert!(!contains(id, &["first"], "second"));

        assert_eq!(install(id, "Marker", &["first"], ["second", "first"]), 1);
        assert_eq!(
            Vec::<String>::from(snapshot(id, &["first"])),
            ["first", "second"]
        );
    }

    #[test]
    fn empty_install_leaves_no_entry() {
        struct Untouched;
        let id = TypeId::of::<Untouched>();

        assert_eq!(install(id, "Untouched", &[], Vec::<String>::new()), 0);
        assert!(registry().read().get(&id).is_none());
    }
}
