//! In-memory store backing the server and the test suite.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    Designation, DesignationPatch, Employee, EmployeePatch, NewDesignation, NewEmployee,
    NewSalarySheet, SalarySheet, SalarySheetPatch,
};

use super::{AttendanceMutation, DesignationStore, EmployeeStore, SalarySheetStore};

/// Stores every record type in insertion-ordered vectors behind
/// `tokio::sync::RwLock`s.
///
/// Each store call takes the lock once and releases it before returning,
/// so no lock is ever held across another store call. The record counts
/// of a small office stay far below anything where the linear scans
/// would matter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
    designations: RwLock<Vec<Designation>>,
    sheets: RwLock<Vec<SalarySheet>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> EngineResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, new: NewEmployee) -> EngineResult<Employee> {
        let employee = new.into_employee();
        let mut employees = self.employees.write().await;
        employees.push(employee.clone());
        debug!(employee_id = %employee.id, name = %employee.name, "created employee record");
        Ok(employee)
    }

    async fn replace(&self, id: Uuid, patch: EmployeePatch) -> EngineResult<Option<Employee>> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                patch.merge_into(employee);
                debug!(employee_id = %id, "replaced employee record");
                Ok(Some(employee.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> EngineResult<bool> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        let removed = employees.len() < before;
        if removed {
            debug!(employee_id = %id, "deleted employee record");
        }
        Ok(removed)
    }

    async fn apply(
        &self,
        id: Uuid,
        mutation: AttendanceMutation,
    ) -> EngineResult<Option<Employee>> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                // Mutate a copy so a failing mutation leaves the record
                // untouched.
                let mut updated = employee.clone();
                mutation(&mut updated)?;
                *employee = updated.clone();
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl DesignationStore for MemoryStore {
    async fn list(&self, only_active: bool) -> EngineResult<Vec<Designation>> {
        let designations = self.designations.read().await;
        Ok(designations
            .iter()
            .filter(|d| !only_active || d.active())
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> EngineResult<Option<Designation>> {
        let designations = self.designations.read().await;
        Ok(designations.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, new: NewDesignation) -> EngineResult<Designation> {
        let designation = new.into_designation();
        let mut designations = self.designations.write().await;
        designations.push(designation.clone());
        debug!(designation_id = %designation.id, name = %designation.name, "created designation");
        Ok(designation)
    }

    async fn replace(
        &self,
        id: Uuid,
        patch: DesignationPatch,
    ) -> EngineResult<Option<Designation>> {
        let mut designations = self.designations.write().await;
        match designations.iter_mut().find(|d| d.id == id) {
            Some(designation) => {
                patch.merge_into(designation);
                Ok(Some(designation.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> EngineResult<bool> {
        let mut designations = self.designations.write().await;
        let before = designations.len();
        designations.retain(|d| d.id != id);
        let removed = designations.len() < before;
        if removed {
            debug!(designation_id = %id, "deleted designation");
        }
        Ok(removed)
    }
}

#[async_trait]
impl SalarySheetStore for MemoryStore {
    async fn list(&self) -> EngineResult<Vec<SalarySheet>> {
        Ok(self.sheets.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> EngineResult<Option<SalarySheet>> {
        let sheets = self.sheets.read().await;
        Ok(sheets.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, new: NewSalarySheet) -> EngineResult<SalarySheet> {
        let sheet = new.into_sheet();
        let mut sheets = self.sheets.write().await;
        sheets.push(sheet.clone());
        debug!(sheet_id = %sheet.id, month = %sheet.month, "archived salary sheet");
        Ok(sheet)
    }

    async fn replace(
        &self,
        id: Uuid,
        patch: SalarySheetPatch,
    ) -> EngineResult<Option<SalarySheet>> {
        let mut sheets = self.sheets.write().await;
        match sheets.iter_mut().find(|s| s.id == id) {
            Some(sheet) => {
                patch.merge_into(sheet);
                Ok(Some(sheet.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> EngineResult<bool> {
        let mut sheets = self.sheets.write().await;
        let before = sheets.len();
        sheets.retain(|s| s.id != id);
        Ok(sheets.len() < before)
    }
}
