//! Optional-field filter used by member searches.

use serde::{Deserialize, Serialize};

/// Loosely specified member filter.
///
/// Every field is optional; an absent field does not constrain the result.
/// Blank strings are treated exactly like absent ones, so a form that posts
/// `username=" "` searches the same way as one that omits the field.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username to match, ignoring blank input.
    pub fn username_filter(&self) -> Option<&str> {
        has_text(self.username.as_deref())
    }

    /// Team name to match, ignoring blank input.
    pub fn team_name_filter(&self) -> Option<&str> {
        has_text(self.team_name.as_deref())
    }

    /// Returns `true` when no field restricts the search.
    pub fn is_unbounded(&self) -> bool {
        self.username_filter().is_none()
            && self.team_name_filter().is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// Keeps a string only if it contains at least one non-whitespace character.
pub fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
