//! Repository for the destination `(id, jsonb)` tables.
//!
//! Write methods take a `PgConnection` so the caller decides whether each
//! table is written on its own connection or all of them share one
//! transaction.

use sqlx::{PgConnection, PgPool};
use waitlist_core::types::RecordId;

use crate::ident::QualifiedTable;
use crate::models::jsonb_row::JsonbRow;

/// Create, clear and bulk-load tables that store one document per row.
pub struct JsonbTableRepo;

impl JsonbTableRepo {
    /// Create the schema and table if either is missing.
    pub async fn ensure_table(
        conn: &mut PgConnection,
        table: &QualifiedTable,
    ) -> Result<(), sqlx::Error> {
        let create_schema = format!("CREATE SCHEMA IF NOT EXISTS {}", table.schema_sql());
        sqlx::query(&create_schema).execute(&mut *conn).await?;

        let create_table = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                jsonb JSONB NOT NULL
             )",
            table.sql()
        );
        sqlx::query(&create_table).execute(&mut *conn).await?;
        Ok(())
    }

    /// Delete every row. Returns the number of rows removed.
    pub async fn clear(conn: &mut PgConnection, table: &QualifiedTable) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {}", table.sql());
        let result = sqlx::query(&query).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Insert all rows in a single statement. Returns the number inserted.
    pub async fn insert_many(
        conn: &mut PgConnection,
        table: &QualifiedTable,
        rows: &[JsonbRow],
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let ids: Vec<RecordId> = rows.iter().map(|r| r.id).collect();
        let docs: Vec<serde_json::Value> = rows.iter().map(|r| r.jsonb.clone()).collect();

        let query = format!(
            "INSERT INTO {} (id, jsonb) \
             SELECT * FROM UNNEST($1::uuid[], $2::jsonb[])",
            table.sql()
        );
        let result = sqlx::query(&query)
            .bind(&ids)
            .bind(&docs)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Optionally clear `table`, then insert `rows`. Returns the number inserted.
    ///
    /// The delete and insert are separate statements; wrap the connection in
    /// a transaction to make them atomic.
    pub async fn replace(
        conn: &mut PgConnection,
        table: &QualifiedTable,
        rows: &[JsonbRow],
        clear: bool,
    ) -> Result<u64, sqlx::Error> {
        if clear {
            let deleted = Self::clear(&mut *conn, table).await?;
            tracing::debug!(table = %table, deleted, "Cleared table");
        }
        Self::insert_many(&mut *conn, table, rows).await
    }

    /// Count rows in `table`.
    pub async fn count(pool: &PgPool, table: &QualifiedTable) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", table.sql());
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// List every row in `table`, ordered by id.
    pub async fn list(pool: &PgPool, table: &QualifiedTable) -> Result<Vec<JsonbRow>, sqlx::Error> {
        let query = format!("SELECT id, jsonb FROM {} ORDER BY id", table.sql());
        sqlx::query_as::<_, JsonbRow>(&query).fetch_all(pool).await
    }
}
