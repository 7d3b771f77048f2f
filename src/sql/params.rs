//! Bind values for SQLite queries built at runtime.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query. The schema only carries
/// text columns plus the integer card id, so two variants suffice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqliteBindValue {
    I64(i64),
    Text(String),
}

impl From<i64> for SqliteBindValue {
    fn from(n: i64) -> Self {
        SqliteBindValue::I64(n)
    }
}

impl From<&str> for SqliteBindValue {
    fn from(s: &str) -> Self {
        SqliteBindValue::Text(s.to_string())
    }
}

impl From<String> for SqliteBindValue {
    fn from(s: String) -> Self {
        SqliteBindValue::Text(s)
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqliteBindValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            SqliteBindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <str as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}
