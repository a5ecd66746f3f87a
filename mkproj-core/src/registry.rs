//! Run-scoped registry mapping target names to stable identifiers.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Namespace for name-based target identifiers.
const TARGET_NAMESPACE: Uuid = Uuid::from_u128(0x6d6b_7072_6f6a_4000_8000_7461_7267_6574);

/// Stable identifier of a registered target.
///
/// Derived from the target name (UUID v5), so the same name always maps to
/// the same identifier across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Uuid);

impl TargetId {
    /// Derive the identifier for a target name.
    pub fn for_name(name: &str) -> Self {
        Self(Uuid::new_v5(&TARGET_NAMESPACE, name.as_bytes()))
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for TargetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Insertion-ordered mapping from target name to [`TargetId`].
///
/// Append-only: a name is never removed or reassigned during a run.
#[derive(Debug, Clone, Default)]
pub struct IdentifierRegistry {
    entries: IndexMap<String, TargetId>,
}

impl IdentifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name, returning its identifier.
    ///
    /// Registering an existing name returns the identifier allocated the
    /// first time and leaves the insertion order unchanged.
    pub fn register(&mut self, name: &str) -> TargetId {
        if let Some(id) = self.entries.get(name) {
            return *id;
        }
        let id = TargetId::for_name(name);
        self.entries.insert(name.to_string(), id);
        id
    }

    /// Look up the identifier of a registered name.
    pub fn get(&self, name: &str) -> Option<TargetId> {
        self.entries.get(name).copied()
    }

    /// All `(name, id)` pairs in insertion order.
    pub fn lookup_all(&self) -> impl Iterator<Item = (&str, TargetId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// All entries except `name`, in insertion order.
    pub fn others<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (&'a str, TargetId)> {
        self.lookup_all().filter(move |(other, _)| *other != name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
