//! Value objects for members and teams.
//!
//! Integers carry a lower bound and names are trimmed and length-checked, so
//! rows converted into the domain layer never need re-validation.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted username or team name, in characters.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("id must be greater than zero")]
    NonPositiveId,
    #[error("value cannot be empty")]
    EmptyString,
    #[error("value is longer than {max} characters")]
    TooLong { max: usize },
    #[error("age cannot be negative")]
    NegativeAge,
}

/// Integer newtype rejecting values below `$min` with `$err`.
macro_rules! bounded_int {
    ($(#[$meta:meta])* $name:ident, min = $min:expr, $err:expr) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value < $min {
                    return Err($err);
                }
                Ok(Self(value))
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_int!(
    /// Primary key of a member row.
    MemberId, min = 1, TypeConstraintError::NonPositiveId
);
bounded_int!(
    /// Primary key of a team row.
    TeamId, min = 1, TypeConstraintError::NonPositiveId
);
bounded_int!(
    /// Age in whole years.
    Age, min = 0, TypeConstraintError::NegativeAge
);

fn normalize_name(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(TypeConstraintError::TooLong { max: MAX_NAME_LEN });
    }
    Ok(trimmed.to_string())
}

/// Trimmed, non-empty name of at most [`MAX_NAME_LEN`] characters.
macro_rules! name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                normalize_name(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

name!(
    /// Login name of a member.
    Username
);
name!(
    /// Unique team name.
    TeamName
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(MemberId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(TeamId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(MemberId::new(7).map(MemberId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_bounded() {
        let name = TeamName::new("  teamA ").expect("valid team name");
        assert_eq!(name.as_str(), "teamA");
        assert_eq!(Username::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            Username::new("x".repeat(MAX_NAME_LEN + 1)),
            Err(TypeConstraintError::TooLong { max: MAX_NAME_LEN })
        );
    }

    #[test]
    fn age_rejects_negative_values() {
        assert_eq!(Age::new(-1), Err(TypeConstraintError::NegativeAge));
        assert_eq!(Age::new(0).map(Age::get), Ok(0));
    }

    #[test]
    fn deserialization_enforces_constraints() {
        assert!(serde_json::from_str::<Age>("-4").is_err());
        assert_eq!(
            serde_json::from_str::<Username>("\" member1 \"").expect("valid username"),
            Username::new("member1").expect("valid username")
        );
    }
}
