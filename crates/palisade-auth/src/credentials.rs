//! The configured credential allow-list.

use std::collections::HashSet;

/// The configured allow-list of valid API keys.
///
/// Loaded once at process start and immutable for the process lifetime, so
/// it is safe to share across concurrent requests behind an `Arc` without
/// locks. An empty set is a distinct, detectable misconfiguration state;
/// the verifier reports it as [`AuthFailure::NoCredentialsConfigured`]
/// rather than silently rejecting everything as invalid.
///
/// [`AuthFailure::NoCredentialsConfigured`]: crate::AuthFailure::NoCredentialsConfigured
///
/// # Example
///
/// ```
/// use palisade_auth::CredentialSet;
///
/// let set = CredentialSet::new(vec!["abc123".to_string()]);
/// assert!(set.contains("abc123"));
/// assert!(!set.contains("wrong"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    keys: HashSet<String>,
}

impl CredentialSet {
    /// Creates a credential set from the configured key list.
    ///
    /// Duplicate keys collapse; membership is what matters.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Creates an empty credential set (the degraded configuration state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the presented credential is a member of the set.
    #[must_use]
    pub fn contains(&self, credential: &str) -> bool {
        self.keys.contains(credential)
    }

    /// Returns `true` if no credentials are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of configured credentials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

// Manual Debug so configured secrets never end up in logs or panic output.
impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("keys", &format!("<{} redacted>", self.keys.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = CredentialSet::new(vec!["abc123".to_string(), "def456".to_string()]);
        assert!(set.contains("abc123"));
        assert!(set.contains("def456"));
        assert!(!set.contains("abc12"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set_is_detectable() {
        let set = CredentialSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = CredentialSet::new(vec!["abc123".to_string(), "abc123".to_string()]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_debug_never_prints_keys() {
        let set = CredentialSet::new(vec!["supersecret".to_string()]);
        let output = format!("{set:?}");
        assert!(!output.contains("supersecret"));
        assert!(output.contains("redacted"));
    }
}
