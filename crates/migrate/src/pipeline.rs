//! The migration run: load, normalize, transform, write.

use sqlx::{PgConnection, PgPool};
use waitlist_core::normalize::{align, skip_header, Dropped};
use waitlist_core::transform::transform;
use waitlist_db::ident::QualifiedTable;
use waitlist_db::models::jsonb_row::JsonbRow;
use waitlist_db::repositories::JsonbTableRepo;

use crate::config::MigrationConfig;
use crate::error::MigrateResult;
use crate::source;

/// Counts from one migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Elements read from the courses file, header included.
    pub courses_loaded: usize,
    /// Elements read from the instructors file, header included.
    pub instructors_loaded: usize,
    pub items_loaded: usize,
    /// Trailing elements discarded so the three inputs line up.
    pub dropped: Dropped,
    pub courses_written: u64,
    pub instructors_written: u64,
    pub reserves_written: u64,
}

/// Destination rows for one table.
struct TableBatch {
    table: QualifiedTable,
    rows: Vec<JsonbRow>,
}

/// Run the whole migration against `pool`.
///
/// Inputs are matched by position only: the i-th course, instructor and item
/// become one reserve regardless of their content.
pub async fn run(config: &MigrationConfig, pool: &PgPool) -> MigrateResult<MigrationReport> {
    // Resolve every table name before any I/O.
    let tables = config.tables()?;

    tracing::info!("Loading data");
    let courses_json = source::load_json_array(&config.courses_path())?;
    let instructors_json = source::load_json_array(&config.instructors_path())?;
    let items_json =
        source::load_items(pool, &tables.item, config.item_order_key.as_deref()).await?;

    let mut report = MigrationReport {
        courses_loaded: courses_json.len(),
        instructors_loaded: instructors_json.len(),
        items_loaded: items_json.len(),
        ..Default::default()
    };

    tracing::info!("Normalizing data");
    let aligned = align(skip_header(courses_json), skip_header(instructors_json), items_json);
    report.dropped = aligned.dropped;
    if !aligned.dropped.is_empty() {
        tracing::warn!(
            aligned = aligned.len(),
            dropped_courses = aligned.dropped.courses,
            dropped_instructors = aligned.dropped.instructors,
            dropped_items = aligned.dropped.items,
            "Input lengths differ; trailing records were dropped"
        );
    }

    tracing::info!(records = aligned.len(), "Transforming data to database rows");
    let transformed = transform(&aligned)?;

    let batches = [
        TableBatch {
            table: tables.courses,
            rows: JsonbRow::from_records(&transformed.courses)?,
        },
        TableBatch {
            table: tables.instructors,
            rows: JsonbRow::from_records(&transformed.instructors)?,
        },
        TableBatch {
            table: tables.reserves,
            rows: JsonbRow::from_records(&transformed.reserves)?,
        },
    ];

    tracing::info!(atomic = config.atomic_writes, "Creating database tables");
    let [courses, instructors, reserves] = write_batches(config, pool, &batches).await?;
    report.courses_written = courses;
    report.instructors_written = instructors;
    report.reserves_written = reserves;

    tracing::info!(
        courses = report.courses_written,
        instructors = report.instructors_written,
        reserves = report.reserves_written,
        "Complete"
    );
    Ok(report)
}

/// Write every batch in order, returning the rows inserted into each.
///
/// In atomic mode all batches share one transaction. Otherwise each batch
/// gets its own connection and a failure leaves earlier tables written.
async fn write_batches(
    config: &MigrationConfig,
    pool: &PgPool,
    batches: &[TableBatch; 3],
) -> MigrateResult<[u64; 3]> {
    let mut written = [0u64; 3];

    if config.atomic_writes {
        let mut tx = pool.begin().await?;
        for (batch, count) in batches.iter().zip(written.iter_mut()) {
            *count = write_batch(&mut *tx, config, batch).await?;
        }
        tx.commit().await?;
    } else {
        for (batch, count) in batches.iter().zip(written.iter_mut()) {
            let mut conn = pool.acquire().await?;
            *count = write_batch(&mut *conn, config, batch).await?;
        }
    }

    Ok(written)
}

async fn write_batch(
    conn: &mut PgConnection,
    config: &MigrationConfig,
    batch: &TableBatch,
) -> Result<u64, sqlx::Error> {
    tracing::info!(count = batch.rows.len(), table = %batch.table, "Saving rows");
    if config.create_missing_tables {
        JsonbTableRepo::ensure_table(&mut *conn, &batch.table).await?;
    }
    JsonbTableRepo::replace(&mut *conn, &batch.table, &batch.rows, config.clear).await
}
