//! Loads the three migration inputs.

use std::path::Path;

use serde_json::Value;
use sqlx::PgPool;
use waitlist_db::ident::QualifiedTable;
use waitlist_db::repositories::ItemRepo;

use crate::error::{MigrateError, MigrateResult};

/// Read a file containing a single JSON array.
pub fn load_json_array(path: &Path) -> MigrateResult<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|source| MigrateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| MigrateError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(records) = value else {
        return Err(MigrateError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    tracing::info!(count = records.len(), path = %path.display(), "Loaded objects");
    Ok(records)
}

/// Read every item document from the inventory table.
pub async fn load_items(
    pool: &PgPool,
    table: &QualifiedTable,
    order_key: Option<&str>,
) -> MigrateResult<Vec<Value>> {
    let items = ItemRepo::list_all(pool, table, order_key).await?;
    tracing::info!(
        count = items.len(),
        table = %table,
        order_key = order_key.unwrap_or("<scan order>"),
        "Loaded rows"
    );
    Ok(items)
}
