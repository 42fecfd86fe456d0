//! Identifier validation for externally supplied record keys.

use std::fmt;
use std::num::NonZeroU64;

use serde::Serialize;

/// Key of a stored entity. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// The first key handed out by a fresh store.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Next key in sequence, or `None` once the key space is used up.
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` when `text` is the canonical decimal form of an integer greater than zero.
///
/// Leading zeros, signs, surrounding whitespace, fractional and exponential
/// forms are all rejected. Digit strings wider than `u64` are rejected too;
/// that limit comes from the width of [`EntityId`], not from a business rule.
pub fn is_valid_identifier(text: &str) -> bool {
    parse_identifier(text).is_some()
}

/// Parses `text` into an [`EntityId`] under the same rules as [`is_valid_identifier`].
pub fn parse_identifier(text: &str) -> Option<EntityId> {
    let value: u64 = text.parse().ok()?;
    // `parse` tolerates "+7" and "007"; only the canonical spelling round-trips.
    if value.to_string() != text {
        return None;
    }
    EntityId::new(value)
}
