//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::AttendanceSchema;
use crate::store::{DesignationStore, EmployeeStore, MemoryStore, SalarySheetStore};

/// Shared application state.
///
/// Holds the record stores behind trait objects so the HTTP layer stays
/// independent of the storage backend, plus the attendance schema this
/// deployment runs under.
#[derive(Clone)]
pub struct AppState {
    /// Employee records.
    employees: Arc<dyn EmployeeStore>,
    /// Designation records.
    designations: Arc<dyn DesignationStore>,
    /// Archived salary sheets.
    sheets: Arc<dyn SalarySheetStore>,
    /// The attendance schema in effect.
    schema: AttendanceSchema,
}

impl AppState {
    /// Creates application state over explicit store implementations.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        designations: Arc<dyn DesignationStore>,
        sheets: Arc<dyn SalarySheetStore>,
        schema: AttendanceSchema,
    ) -> Self {
        Self {
            employees,
            designations,
            sheets,
            schema,
        }
    }

    /// Creates application state backed by a single in-memory store.
    pub fn in_memory(schema: AttendanceSchema) -> Self {
        let store = Arc::new(MemoryStore::new());
        let employees: Arc<dyn EmployeeStore> = store.clone();
        let designations: Arc<dyn DesignationStore> = store.clone();
        let sheets: Arc<dyn SalarySheetStore> = store;
        Self::new(employees, designations, sheets, schema)
    }

    /// Returns the employee store.
    pub fn employees(&self) -> &dyn EmployeeStore {
        self.employees.as_ref()
    }

    /// Returns the designation store.
    pub fn designations(&self) -> &dyn DesignationStore {
        self.designations.as_ref()
    }

    /// Returns the salary sheet store.
    pub fn sheets(&self) -> &dyn SalarySheetStore {
        self.sheets.as_ref()
    }

    /// Returns the attendance schema in effect.
    pub fn schema(&self) -> AttendanceSchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEmployee;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_in_memory_state_shares_one_store() {
        let state = AppState::in_memory(AttendanceSchema::V2);
        assert_eq!(state.schema(), AttendanceSchema::V2);

        let new = NewEmployee {
            name: "राम कुमार".to_string(),
            position: "Manager".to_string(),
            basic: 25000,
            hra: 5000,
            allowance: 2000,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: AttendanceSchema::V2.default_sheet(),
        };
        let created = state.employees().create(new).await.unwrap();

        let cloned = state.clone();
        let listed = cloned.employees().list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }
}
