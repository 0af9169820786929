//! Combination constraints between dimensions.
//!
//! A value of one dimension may restrict which values of another dimension
//! it can be combined with. Constraints are declared per other dimension as a
//! wildcard policy plus per-value overrides:
//!
//! ```text
//! en_US:
//!   country: { "*": deny, "us": allow }
//! ```
//!
//! An override for the candidate's exact value wins; otherwise the wildcard
//! decides.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::ContentDimensionValue;

/// Whether a combination is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinationPolicy {
    /// The combination is permitted. This is the default when nothing is declared.
    #[default]
    Allow,
    /// The combination is forbidden.
    Deny,
}

impl CombinationPolicy {
    /// Returns true for `Allow`.
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, CombinationPolicy::Allow)
    }
}

impl From<bool> for CombinationPolicy {
    fn from(allowed: bool) -> Self {
        if allowed {
            CombinationPolicy::Allow
        } else {
            CombinationPolicy::Deny
        }
    }
}

/// Allow/deny rules for combining with the values of one other dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContentDimensionConstraints {
    wildcard: CombinationPolicy,
    overrides: BTreeMap<String, CombinationPolicy>,
}

impl ContentDimensionConstraints {
    /// Creates constraints with the given wildcard policy and no overrides.
    pub fn new(wildcard: CombinationPolicy) -> Self {
        Self {
            wildcard,
            overrides: BTreeMap::new(),
        }
    }

    /// Allows every value unless overridden.
    pub fn allow_all() -> Self {
        Self::new(CombinationPolicy::Allow)
    }

    /// Denies every value unless overridden.
    pub fn deny_all() -> Self {
        Self::new(CombinationPolicy::Deny)
    }

    /// Adds an override for a single value of the other dimension.
    pub fn with_override(mut self, value: impl Into<String>, policy: CombinationPolicy) -> Self {
        self.overrides.insert(value.into(), policy);
        self
    }

    /// Explicitly allows a single value.
    pub fn allow(self, value: impl Into<String>) -> Self {
        self.with_override(value, CombinationPolicy::Allow)
    }

    /// Explicitly denies a single value.
    pub fn deny(self, value: impl Into<String>) -> Self {
        self.with_override(value, CombinationPolicy::Deny)
    }

    /// Returns true if values without an override are allowed.
    pub fn is_wildcard_allowed(&self) -> bool {
        self.wildcard.is_allowed()
    }

    /// Returns the wildcard policy.
    pub fn wildcard(&self) -> CombinationPolicy {
        self.wildcard
    }

    /// Returns the per-value overrides.
    pub fn overrides(&self) -> &BTreeMap<String, CombinationPolicy> {
        &self.overrides
    }

    /// Decides the policy for a raw value string.
    pub fn policy_for(&self, value: &str) -> CombinationPolicy {
        self.overrides.get(value).copied().unwrap_or(self.wildcard)
    }

    /// Returns true if `other` may be combined with the owning value.
    pub fn allows_combination_with(&self, other: &ContentDimensionValue) -> bool {
        self.policy_for(other.value()).is_allowed()
    }
}
