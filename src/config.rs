//! Configuration for directory behavior.

use serde::{Deserialize, Serialize};

/// Options controlling a [`ContactDirectory`](crate::ContactDirectory).
///
/// The default rejects duplicate names, which is the stricter policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectoryOptions {
    /// Allow two contacts to share the same (first name, last name)
    /// pair. When false, `add` reports a duplicate instead of inserting.
    pub allow_duplicate_names: bool,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_names: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects_duplicates() {
        let options = DirectoryOptions::default();
        assert!(!options.allow_duplicate_names);
    }

    #[test]
    fn test_options_deserialization_defaults() {
        let options: DirectoryOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DirectoryOptions::default());
    }
}
