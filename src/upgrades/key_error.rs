use std::sync::Arc;

use thiserror::Error;

/// A csv key that does not belong to any [`UpgradeWithType`](super::upgrade_with_type::UpgradeWithType).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("InvalidUpgradeKey: no upgrade with type matches the csv key {0:?}")]
pub struct InvalidUpgradeKey(pub(crate) Arc<str>);

impl InvalidUpgradeKey {
    pub fn key(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidUpgradeKey;

    #[test]
    fn test_message_names_key() {
        let err = InvalidUpgradeKey("X".into());
        assert_eq!(err.key(), "X");
        assert_eq!(
            err.to_string(),
            "InvalidUpgradeKey: no upgrade with type matches the csv key \"X\""
        );
    }
}
