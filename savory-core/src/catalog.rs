//! Table Catalog
//!
//! The restaurant floor plan as data: a fixed list of tables loaded once at
//! startup (embedded seed, or an external JSON file via configuration) and
//! never mutated afterwards. Views copy what they render; nothing writes
//! back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Embedded seed data: the eight tables of the Savory Haven dining room.
const BUILTIN_TABLES: &str = include_str!("../data/tables.json");

/// Seating area category.
///
/// Cosmetic only: it drives labels and colors in the UI and has no effect
/// on selection or reservation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Window,
    Private,
    Center,
    Bar,
}

impl TableType {
    /// All types, legend order.
    pub const ALL: [TableType; 4] = [
        TableType::Window,
        TableType::Private,
        TableType::Center,
        TableType::Bar,
    ];

    /// Display label, as shown on cards and in the floor-plan legend.
    pub fn label(&self) -> &'static str {
        match self {
            TableType::Window => "Window View",
            TableType::Private => "Private Dining",
            TableType::Center => "Main Floor",
            TableType::Bar => "Bar Seating",
        }
    }
}

/// Dining table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Unique identifier, referenced by reservations.
    pub id: String,
    /// Display number on the floor plan.
    pub number: u32,
    /// Maximum party size.
    pub capacity: u32,
    /// Seating area category.
    #[serde(rename = "type")]
    pub table_type: TableType,
    /// Unavailable tables are rendered but can never be selected.
    pub available: bool,
    /// Floor-plan position as percentage offsets.
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no tables")]
    Empty,
    #[error("duplicate table id '{0}'")]
    DuplicateId(String),
    #[error("table '{id}' has zero capacity")]
    ZeroCapacity { id: String },
}

/// Immutable table catalog.
///
/// Fixed once loaded; the accessors hand out shared references only, so no
/// component can add, remove, or mutate a table during execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tables: Vec<Table>,
}

impl Catalog {
    /// Load the embedded seed catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_TABLES)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tables: Vec<Table> = serde_json::from_str(json)?;
        Self::validate(tables)
    }

    /// Load a catalog from an external JSON file (configuration override).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(tables: Vec<Table>) -> Result<Self, CatalogError> {
        if tables.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.id.as_str()) {
                return Err(CatalogError::DuplicateId(table.id.clone()));
            }
            if table.capacity == 0 {
                return Err(CatalogError::ZeroCapacity {
                    id: table.id.clone(),
                });
            }
        }
        Ok(Self { tables })
    }

    /// All tables, floor-plan order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by id.
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Tables open for selection.
    pub fn available(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(|t| t.available)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
