pub mod key_error;
pub mod upgrade_with_type;
mod sql;
