use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

use super::upgrade_with_type::UpgradeWithType;

// Stored as the csv key in a TEXT column.

impl ToSql for UpgradeWithType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.csv_key().to_sql()
    }
}

impl FromSql for UpgradeWithType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let key = value.as_str()?;
        UpgradeWithType::from_csv_key(key).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
