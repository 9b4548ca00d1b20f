//! CSV loading for the patient table.
//!
//! Expected format (with headers, any column order):
//! `age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT`

use crate::Database;
use hfd_records::patient::parse_patient_csv;
use rusqlite::params;

impl Database {
    /// Load patient records from a CSV string. Returns the number of rows inserted.
    ///
    /// All rows are inserted in one transaction: a malformed file leaves the
    /// table untouched.
    ///
    /// # Example CSV
    /// ```text
    /// age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT
    /// 75,0,582,0,20,1,265000,1.9,130,1,0,4,1
    /// ```
    pub fn load_patients(&self, csv_data: &str) -> anyhow::Result<usize> {
        let patients = parse_patient_csv(csv_data)?;

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO patients (
                    age, anaemia, creatinine_phosphokinase, diabetes, ejection_fraction,
                    high_blood_pressure, platelets, serum_creatinine, serum_sodium,
                    sex, smoking, time, death_event
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;
            for p in &patients {
                stmt.execute(params![
                    p.age,
                    p.anaemia,
                    p.creatinine_phosphokinase,
                    p.diabetes,
                    p.ejection_fraction,
                    p.high_blood_pressure,
                    p.platelets,
                    p.serum_creatinine,
                    p.serum_sodium,
                    p.sex,
                    p.smoking,
                    p.time,
                    p.death_event,
                ])?;
            }
        }
        tx.commit()?;

        log::info!("[HFD] loader: Loaded {} patients", patients.len());
        Ok(patients.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const CSV: &str = "\
age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT
75,0,582,0,20,1,265000,1.9,130,1,0,4,1
55,0,7861,0,38,0,263358.03,1.1,136,1,0,6,1
60,1,315,1,60,0,454000,1.1,131,1,1,180,0
";

    #[test]
    fn load_patients_from_csv() {
        let db = Database::new().unwrap();
        let inserted = db.load_patients(CSV).unwrap();
        assert_eq!(inserted, 3);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let cpk: f64 = conn
            .query_row(
                "SELECT creatinine_phosphokinase FROM patients WHERE id = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((cpk - 7861.0).abs() < 0.01);

        let deaths: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM patients WHERE death_event = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(deaths, 2);
    }

    #[test]
    fn load_preserves_row_order() {
        let db = Database::new().unwrap();
        db.load_patients(CSV).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn.prepare("SELECT time FROM patients ORDER BY id").unwrap();
        let times: Vec<f64> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(times, vec![4.0, 6.0, 180.0]);
    }

    #[test]
    fn malformed_csv_leaves_table_empty() {
        let db = Database::new().unwrap();
        let bad = "\
age,anaemia,creatinine_phosphokinase,diabetes,ejection_fraction,high_blood_pressure,platelets,serum_creatinine,serum_sodium,sex,smoking,time,DEATH_EVENT
75,0,582,0,20,1,265000,1.9,130,1,0,4,1
55,0,7861,0,38,0,263358.03,1.1,136,1,0,6,7
";
        assert!(db.load_patients(bad).is_err());
        assert_eq!(db.query_patient_count().unwrap(), 0);
    }
}
