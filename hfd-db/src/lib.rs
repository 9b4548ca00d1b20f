//! In-memory SQLite store for the heart failure clinical records dataset.
//!
//! The dataset CSV is loaded once into a single `patients` table and then
//! only read. Typed query methods return serializable structs that the view
//! layer turns into D3.js chart payloads.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data embedded via `include_str!` in the consuming app and loaded on mount
//! - Column names in SQL come only from the `hfd_records` column enums, never
//!   from free text
//!
//! # Usage
//!
//! ```rust
//! use hfd_db::Database;
//! use hfd_records::IndicatorColumn;
//!
//! let db = Database::new().unwrap();
//! db.load_patients("age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT\n75,0,582,0,20,1,265000,1.9,130,1,0,4,1\n").unwrap();
//!
//! let slices = db.query_breakdown(IndicatorColumn::Sex).unwrap();
//! assert_eq!(slices.len(), 4);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use queries::{bin_values, DISTRIBUTION_BINS};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the patient table.
///
/// Cheaply cloneable (via `Rc`) for sharing across Dioxus effects in a
/// single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_patients`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn database_clones_share_connection() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_patients(
            "age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT\n75,0,582,0,20,1,265000,1.9,130,1,0,4,1\n",
        )
        .unwrap();
        assert_eq!(db2.query_patient_count().unwrap(), 1);
        assert!(db == db2);
        assert!(db != Database::new().unwrap());
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_patient_count().unwrap(), 0);
    }
}
