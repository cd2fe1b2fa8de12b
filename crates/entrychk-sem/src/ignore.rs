//! The ignore-code registry.
//!
//! A sorted-by-descending collection of diagnostic codes the operator has
//! asked the validator not to report, with O(log n) membership. The
//! process-wide registry is written during CLI setup and read-only once
//! validation begins; library callers can instead thread an explicit
//! [`IgnoreSet`] through `validate_with`.

use std::sync::{PoisonError, RwLock};

use entrychk_types::codes;

/// A set of suppressed diagnostic codes, kept sorted descending.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    codes: Vec<i32>,
}

impl IgnoreSet {
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Add `code` to the set. Idempotent; keeps the descending order.
    pub fn ignore(&mut self, code: i32) {
        if !self.is_ignored(code) {
            self.codes.push(code);
            self.codes.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    /// Membership test, O(log n) on the descending-sorted array.
    pub fn is_ignored(&self, code: i32) -> bool {
        self.codes.binary_search_by(|probe| code.cmp(probe)).is_ok()
    }

    /// True when `code` should be dropped from validator output: ignored
    /// and not in the reserved internal range (reserved codes are never
    /// suppressed).
    pub fn suppresses(&self, code: i32) -> bool {
        !codes::is_reserved(code) && self.is_ignored(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in storage (descending) order.
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }
}

static REGISTRY: RwLock<IgnoreSet> = RwLock::new(IgnoreSet::new());

/// Add a code to the process-wide registry.
pub fn ignore_code(code: i32) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .ignore(code);
}

/// Membership test against the process-wide registry.
pub fn is_ignored(code: i32) -> bool {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_ignored(code)
}

/// Snapshot of the process-wide registry, for validators that take an
/// explicit set.
pub fn registry_snapshot() -> IgnoreSet {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
