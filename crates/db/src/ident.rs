//! Quoting for schema and table names that come from configuration.
//!
//! Names cannot be bound as query parameters, so every name that ends up in
//! SQL text goes through [`quote_ident`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    #[error("Identifier must not be empty")]
    Empty,

    #[error("Identifier {0:?} contains a NUL character")]
    Nul(String),
}

/// Quote a single SQL identifier, doubling any embedded double quotes.
pub fn quote_ident(name: &str) -> Result<String, IdentError> {
    if name.is_empty() {
        return Err(IdentError::Empty);
    }
    if name.contains('\0') {
        return Err(IdentError::Nul(name.to_string()));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

/// A table addressed by schema and name.
///
/// `Display` renders the plain `schema.table` form used in logs; the quoted
/// form for SQL comes from [`QualifiedTable::sql`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedTable {
    schema: String,
    table: String,
    quoted_schema: String,
    quoted: String,
}

impl QualifiedTable {
    pub fn new(schema: &str, table: &str) -> Result<Self, IdentError> {
        let quoted_schema = quote_ident(schema)?;
        let quoted = format!("{quoted_schema}.{}", quote_ident(table)?);
        Ok(Self {
            schema: schema.to_string(),
            table: table.to_string(),
            quoted_schema,
            quoted,
        })
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Quoted `"schema"."table"` for use in SQL text.
    pub fn sql(&self) -> &str {
        &self.quoted
    }

    /// Quoted schema name alone.
    pub fn schema_sql(&self) -> &str {
        &self.quoted_schema
    }
}

impl fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}
