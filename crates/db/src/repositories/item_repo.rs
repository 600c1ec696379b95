//! Repository for the inventory `item` table the migration reads from.

use serde_json::Value;
use sqlx::PgPool;

use crate::ident::QualifiedTable;

/// Reads inventory items as raw `jsonb` documents.
pub struct ItemRepo;

impl ItemRepo {
    /// Return the `jsonb` document of every row in `table`.
    ///
    /// With `order_key` set, rows are sorted by that top-level document field
    /// (as text, nulls last) so positional alignment is repeatable. Without it
    /// rows come back in scan order, which PostgreSQL does not guarantee.
    pub async fn list_all(
        pool: &PgPool,
        table: &QualifiedTable,
        order_key: Option<&str>,
    ) -> Result<Vec<Value>, sqlx::Error> {
        match order_key {
            Some(key) => {
                let query = format!(
                    "SELECT jsonb FROM {} ORDER BY jsonb ->> $1 ASC NULLS LAST",
                    table.sql()
                );
                sqlx::query_scalar::<_, Value>(&query)
                    .bind(key)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT jsonb FROM {}", table.sql());
                sqlx::query_scalar::<_, Value>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
