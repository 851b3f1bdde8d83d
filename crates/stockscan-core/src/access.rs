//! # Access Gate
//!
//! Decides the session's access level from a name typed by the operator.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Admin Name Check                                  │
//! │                                                                         │
//! │  "  Cody Eckhardt "                                                    │
//! │       │ trim + lowercase                                               │
//! │       ▼                                                                 │
//! │  "cody eckhardt"                                                       │
//! │       │ exact membership in the allow-list                             │
//! │       ├── member ──────────► Role::Admin                               │
//! │       └── not a member ────► Role::Staff (never rejected outright)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failing open to staff means the worst outcome of a typo is
//! under-privilege, never a locked-out operator.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Role;
use crate::DEFAULT_ADMIN_NAMES;

/// Normalizes a name for allow-list comparison.
pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Fixed set of full names allowed admin access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAllowList {
    names: HashSet<String>,
}

impl AdminAllowList {
    /// Builds an allow-list, normalizing every entry.
    ///
    /// Entries that are blank after trimming are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();

        AdminAllowList { names }
    }

    /// Number of distinct authorized names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nobody can become admin.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact membership test after normalization.
    pub fn contains(&self, name_input: &str) -> bool {
        self.names.contains(&normalize_name(name_input))
    }

    /// Maps a typed name to an access level.
    ///
    /// ## Example
    /// ```rust
    /// use stockscan_core::{AdminAllowList, Role};
    ///
    /// let gate = AdminAllowList::default();
    /// assert_eq!(gate.classify("Cody Eckhardt"), Role::Admin);
    /// assert_eq!(gate.classify("cody eckhardt  "), Role::Admin);
    /// assert_eq!(gate.classify("Random Person"), Role::Staff);
    /// ```
    pub fn classify(&self, name_input: &str) -> Role {
        if self.contains(name_input) {
            Role::Admin
        } else {
            Role::Staff
        }
    }

    /// Like [`classify`](Self::classify), but reports a failed admin login.
    ///
    /// ## Returns
    /// * `Ok(Role::Admin)` - Name is on the list
    /// * `Err(UnauthorizedAdminAttempt)` - Caller should tell the operator
    ///   and continue with [`Role::Staff`]
    pub fn authorize_admin(&self, name_input: &str) -> CoreResult<Role> {
        match self.classify(name_input) {
            Role::Admin => Ok(Role::Admin),
            _ => Err(CoreError::UnauthorizedAdminAttempt(
                name_input.trim().to_string(),
            )),
        }
    }
}

impl Default for AdminAllowList {
    fn default() -> Self {
        AdminAllowList::new(DEFAULT_ADMIN_NAMES.iter().copied())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_list() {
        let gate = AdminAllowList::default();
        assert_eq!(gate.classify("Cody Eckhardt"), Role::Admin);
        assert_eq!(gate.classify("cody eckhardt  "), Role::Admin);
        assert_eq!(gate.classify("\tCODY ECKHARDT\n"), Role::Admin);
        assert_eq!(gate.classify("Random Person"), Role::Staff);
    }

    #[test]
    fn test_no_partial_or_fuzzy_match() {
        let gate = AdminAllowList::default();
        assert_eq!(gate.classify("Cody"), Role::Staff);
        assert_eq!(gate.classify("Cody  Eckhardt"), Role::Staff);
        assert_eq!(gate.classify("Cody Eckhardt Jr"), Role::Staff);
        assert_eq!(gate.classify(""), Role::Staff);
    }

    #[test]
    fn test_authorize_admin_reports_downgrade() {
        let gate = AdminAllowList::default();
        assert_eq!(gate.authorize_admin(" Cody Eckhardt").unwrap(), Role::Admin);

        let err = gate.authorize_admin("  Mallory ").unwrap_err();
        assert!(matches!(err, CoreError::UnauthorizedAdminAttempt(ref name) if name == "Mallory"));
    }

    #[test]
    fn test_custom_list_is_normalized() {
        let gate = AdminAllowList::new(["  Ada Lovelace ", "", "   ", "GRACE HOPPER"]);
        assert_eq!(gate.len(), 2);
        assert!(gate.contains("ada lovelace"));
        assert!(gate.contains("Grace Hopper"));
        assert!(!gate.contains("Cody Eckhardt"));
    }

    #[test]
    fn test_empty_list_grants_nobody() {
        let gate = AdminAllowList::new(Vec::<String>::new());
        assert!(gate.is_empty());
        assert_eq!(gate.classify("Cody Eckhardt"), Role::Staff);
    }
}
