use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::key_error::InvalidUpgradeKey;

/// What an upgrade applies to.
///
/// Every kind carries the one letter key used for it in the upgrade csv.
/// Serialized forms (serde, sqlite) use that key as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpgradeWithType {
    #[serde(rename = "A")]
    Ability,
    #[serde(rename = "I")]
    Item,
    #[serde(rename = "W")]
    Weapon,
}

impl UpgradeWithType {
    /// Declaration order.
    pub const ALL: [UpgradeWithType; 3] = [
        UpgradeWithType::Ability,
        UpgradeWithType::Item,
        UpgradeWithType::Weapon,
    ];

    pub fn all() -> impl ExactSizeIterator<Item = UpgradeWithType> + DoubleEndedIterator {
        Self::ALL.into_iter()
    }

    pub const fn csv_key(self) -> &'static str {
        match self {
            UpgradeWithType::Ability => "A",
            UpgradeWithType::Item => "I",
            UpgradeWithType::Weapon => "W",
        }
    }

    /// Exact, case sensitive match against [`csv_key`](Self::csv_key).
    pub fn from_csv_key(key: &str) -> Result<Self, InvalidUpgradeKey> {
        match key {
            "A" => Ok(UpgradeWithType::Ability),
            "I" => Ok(UpgradeWithType::Item),
            "W" => Ok(UpgradeWithType::Weapon),
            _ => {
                debug!(key, "unrecognized upgrade with type csv key");
                Err(InvalidUpgradeKey(key.into()))
            }
        }
    }
}

impl Display for UpgradeWithType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.csv_key())
    }
}

impl FromStr for UpgradeWithType {
    type Err = InvalidUpgradeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_csv_key(s)
    }
}

impl TryFrom<&str> for UpgradeWithType {
    type Error = InvalidUpgradeKey;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_csv_key(value)
    }
}

impl TryFrom<String> for UpgradeWithType {
    type Error = InvalidUpgradeKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_csv_key(&value)
    }
}
