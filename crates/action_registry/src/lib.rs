//! Uniqueness registry for action-type labels.
//!
//! Action labels are used as discriminants in tagged-union state
//! representations, so two actions sharing a label would silently shadow each
//! other. Routing every label through [`unique_label`] at load time turns that
//! defect into an immediate error.

#![forbid(unsafe_code)]

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;
use thiserror::Error;

/// A label was registered twice.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("action label {0:?} is not unique")]
pub struct DuplicateLabel(pub String);

/// Explicitly owned set of labels seen so far.
///
/// Entries are never removed; the set grows monotonically for the lifetime of
/// the registry. Dropping the registry is the only reset.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    seen: HashSet<String>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` as seen.
    ///
    /// # Errors
    /// Returns [`DuplicateLabel`] if the same label was registered before.
    /// The error must reach the caller; a duplicate discriminant is a
    /// programming-time defect, not a recoverable condition.
    pub fn register(&mut self, label: &str) -> Result<(), DuplicateLabel> {
        if !self.seen.insert(label.to_owned()) {
            return Err(DuplicateLabel(label.to_owned()));
        }
        Ok(())
    }

    /// Whether `label` has been registered.
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(label)
    }

    /// Number of registered labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

// Process-wide registry backing `unique_label`. Lives for the process
// lifetime and is never reset between calls; the mutex serialises the
// check-and-insert so concurrent registrations cannot lose updates.
static PROCESS_REGISTRY: Lazy<Mutex<LabelRegistry>> =
    Lazy::new(|| Mutex::new(LabelRegistry::new()));

/// Register `label` against the process-wide registry and hand it back.
///
/// Every action label is expected to pass through here once, at load time,
/// which makes this the natural choke point for the uniqueness guarantee.
///
/// # Errors
/// Returns [`DuplicateLabel`] if this process has seen `label` before.
pub fn unique_label(label: &str) -> Result<String, DuplicateLabel> {
    let mut registry = match PROCESS_REGISTRY.lock() {
        Ok(guard) => guard,
        // A poisoned lock only means another thread panicked mid-insert;
        // the set itself is still valid, so keep enforcing uniqueness.
        Err(poisoned) => poisoned.into_inner(),
    };
    registry.register(label).inspect_err(|duplicate| {
        warn!("duplicate action label rejected: {duplicate}");
    })?;
    Ok(label.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_succeeds() {
        let mut registry = LabelRegistry::new();
        assert!(registry.register("[Auth] Login").is_ok());
        assert!(registry.contains("[Auth] Login"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn second_registration_fails_and_names_the_label() {
        let mut registry = LabelRegistry::new();
        registry.register("[Cart] Add Item").unwrap();
        let err = registry.register("[Cart] Add Item").unwrap_err();
        assert_eq!(err, DuplicateLabel("[Cart] Add Item".to_owned()));
        assert!(err.to_string().contains("[Cart] Add Item"));
    }

    #[test]
    fn distinct_labels_coexist() {
        let mut registry = LabelRegistry::new();
        registry.register("[Cart] Add Item").unwrap();
        registry.register("[Cart] Remove Item").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_never_shrinks() {
        let mut registry = LabelRegistry::new();
        registry.register("a").unwrap();
        registry.register("a").unwrap_err();
        registry.register("a").unwrap_err();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn process_wide_label_survives_across_calls() {
        let _ = env_logger::builder().is_test(true).try_init();
        // Labels namespaced to this test; the process registry is shared
        // with every other test in this binary.
        let label = "[test::process_wide] Load";
        assert_eq!(unique_label(label).unwrap(), label);
        assert_eq!(unique_label(label).unwrap_err(), DuplicateLabel(label.to_owned()));
    }

    #[test]
    fn process_wide_registry_serialises_concurrent_inserts() {
        let _ = env_logger::builder().is_test(true).try_init();
        let label = "[test::concurrent] Tick";
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || unique_label(label).is_ok()))
            .collect();
        let wins = handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .filter(|claimed| *claimed)
            .count();
        // Exactly one thread may claim the label.
        assert_eq!(wins, 1);
    }
}
