//! Seed file loading and first-start seeding.
//!
//! A fresh deployment starts with an empty store; the seed file carries
//! the sample designations and employees the register ships with. The
//! seed is only applied when the employee store is empty, so restarting
//! against a populated backend never duplicates records.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceSchema, DEFAULT_ESI_RATE_BP, DEFAULT_PF_RATE_BP, NewDesignation, NewEmployee,
};
use crate::store::{DesignationStore, EmployeeStore};

/// Parsed seed file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    /// Designations to insert, in order.
    #[serde(default)]
    pub designations: Vec<SeedDesignation>,
    /// Employees to insert, in order.
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}

/// One designation row in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDesignation {
    /// Title text.
    pub name: String,
    /// 1 when active; active when omitted.
    #[serde(default = "default_active")]
    pub is_active: i32,
}

/// One employee row in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEmployee {
    /// Display name.
    pub name: String,
    /// Designation name.
    pub position: String,
    /// Monthly basic salary.
    pub basic: i64,
    /// Monthly house rent allowance.
    pub hra: i64,
    /// Monthly other allowance.
    pub allowance: i64,
    /// ESI rate in basis points.
    #[serde(default = "default_esi")]
    pub esi_rate: u32,
    /// PF rate in basis points.
    #[serde(default = "default_pf")]
    pub pf_rate: u32,
    /// Flat monthly deduction.
    #[serde(default)]
    pub other_deduction: i64,
    /// Attendance as wire symbols; a fresh sheet when omitted.
    #[serde(default)]
    pub attendance: Option<Vec<String>>,
}

fn default_active() -> i32 {
    1
}

fn default_esi() -> u32 {
    DEFAULT_ESI_RATE_BP
}

fn default_pf() -> u32 {
    DEFAULT_PF_RATE_BP
}

impl SeedFile {
    /// Loads and parses a seed file.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl SeedEmployee {
    fn into_new_employee(self, schema: AttendanceSchema) -> EngineResult<NewEmployee> {
        let attendance = match self.attendance {
            Some(symbols) => schema.sheet_from_symbols(&symbols)?,
            None => schema.default_sheet(),
        };
        Ok(NewEmployee {
            name: self.name,
            position: self.position,
            basic: self.basic,
            hra: self.hra,
            allowance: self.allowance,
            esi_rate: self.esi_rate,
            pf_rate: self.pf_rate,
            other_deduction: self.other_deduction,
            attendance,
        })
    }
}

/// Inserts the seed records when the employee store is empty.
///
/// Returns the number of records inserted, zero when the store already
/// held employees and the seed was skipped.
pub async fn seed_if_empty(
    employees: &dyn EmployeeStore,
    designations: &dyn DesignationStore,
    seed: SeedFile,
    schema: AttendanceSchema,
) -> EngineResult<usize> {
    if !employees.list().await?.is_empty() {
        info!("employee store already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for designation in seed.designations {
        designations
            .create(NewDesignation {
                name: designation.name,
                is_active: designation.is_active,
            })
            .await?;
        inserted += 1;
    }
    for employee in seed.employees {
        let new = employee.into_new_employee(schema)?;
        employees.create(new).await?;
        inserted += 1;
    }
    info!(inserted, "seed records applied");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceCode;
    use crate::store::MemoryStore;

    const SAMPLE_SEED: &str = r#"
designations:
  - name: Manager
  - name: Typist
    is_active: 0
employees:
  - name: "राम कुमार"
    position: Manager
    basic: 25000
    hra: 5000
    allowance: 2000
  - name: "सीता देवी"
    position: Assistant
    basic: 18000
    hra: 3600
    allowance: 1500
    esi_rate: 0
    other_deduction: 500
    attendance: [P, H, A]
"#;

    #[tokio::test]
    async fn test_seed_applies_to_empty_store() {
        let store = MemoryStore::new();
        let seed: SeedFile = serde_yaml::from_str(SAMPLE_SEED).unwrap();

        let inserted = seed_if_empty(&store, &store, seed, AttendanceSchema::V2)
            .await
            .unwrap();
        assert_eq!(inserted, 4);

        let employees = EmployeeStore::list(&store).await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].esi_rate, DEFAULT_ESI_RATE_BP);
        assert_eq!(employees[1].esi_rate, 0);
        assert_eq!(employees[1].other_deduction, 500);
        assert_eq!(employees[1].attendance.get(0), AttendanceCode::Present);
        assert_eq!(employees[1].attendance.get(1), AttendanceCode::HalfDay);
        assert_eq!(employees[1].attendance.get(3), AttendanceCode::Unset);

        let active = DesignationStore::list(&store, true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Manager");
        let all = DesignationStore::list(&store, false).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_store_populated() {
        let store = MemoryStore::new();
        let seed: SeedFile = serde_yaml::from_str(SAMPLE_SEED).unwrap();
        seed_if_empty(&store, &store, seed.clone(), AttendanceSchema::V2)
            .await
            .unwrap();

        let seed: SeedFile = serde_yaml::from_str(SAMPLE_SEED).unwrap();
        let inserted = seed_if_empty(&store, &store, seed, AttendanceSchema::V2)
            .await
            .unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(EmployeeStore::list(&store).await.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_seed_file_is_config_not_found() {
        let result = SeedFile::load("/nonexistent/seed.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_seed_rejects_unknown_attendance_symbol() {
        let yaml = r#"
employees:
  - name: "राम कुमार"
    position: Manager
    basic: 25000
    hra: 5000
    allowance: 2000
    attendance: [P, X]
"#;
        let seed: SeedFile = serde_yaml::from_str(yaml).unwrap();
        let result = seed.employees[0]
            .clone()
            .into_new_employee(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::UnknownAttendanceCode { ref code }) if code == "X"
        ));
    }
}
