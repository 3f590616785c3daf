pub mod upgrades;

pub use upgrades::{key_error::InvalidUpgradeKey, upgrade_with_type::UpgradeWithType};
