//! SQL schema for the in-memory patient table.

/// Returns the schema as a single batch string.
///
/// One `patients` table whose columns use the snake_case keys of
/// `hfd_records::ContinuousColumn` / `IndicatorColumn` plus `death_event`.
/// `id` preserves the CSV row order.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS patients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        age REAL NOT NULL,
        anaemia INTEGER NOT NULL CHECK (anaemia IN (0, 1)),
        creatinine_phosphokinase REAL NOT NULL,
        diabetes INTEGER NOT NULL CHECK (diabetes IN (0, 1)),
        ejection_fraction REAL NOT NULL,
        high_blood_pressure INTEGER NOT NULL CHECK (high_blood_pressure IN (0, 1)),
        platelets REAL NOT NULL,
        serum_creatinine REAL NOT NULL,
        serum_sodium REAL NOT NULL,
        sex INTEGER NOT NULL CHECK (sex IN (0, 1)),
        smoking INTEGER NOT NULL CHECK (smoking IN (0, 1)),
        time REAL NOT NULL,
        death_event INTEGER NOT NULL CHECK (death_event IN (0, 1))
    );
    CREATE INDEX IF NOT EXISTS idx_patients_death_event ON patients(death_event);
    "#
}
