//! Record stores for the salary engine.
//!
//! This module defines the async store traits the HTTP layer is written
//! against, the in-memory implementation used by the server and the test
//! suite, and the bulk attendance operations that fan out over every
//! employee record.

mod bulk;
mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    Designation, DesignationPatch, Employee, EmployeePatch, NewDesignation, NewEmployee,
    NewSalarySheet, SalarySheet, SalarySheetPatch,
};

pub use bulk::{BulkOutcome, mark_all, reset_attendance};
pub use memory::MemoryStore;

/// A whole-record mutation applied under the store's write isolation.
///
/// The store hands the closure a copy of the current record; the write
/// only lands if the closure returns `Ok`. Concurrent mutations of the
/// same record are last-write-wins at whole-record granularity.
pub type AttendanceMutation = Box<dyn FnOnce(&mut Employee) -> EngineResult<()> + Send>;

/// Storage contract for employee records.
///
/// Listings preserve insertion order so report serial numbers stay
/// stable. Absent records surface as `Ok(None)` / `Ok(false)`; the error
/// channel is reserved for backend failures.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns all employee records in insertion order.
    async fn list(&self) -> EngineResult<Vec<Employee>>;

    /// Returns one record, or `None` when the id is absent.
    async fn get(&self, id: Uuid) -> EngineResult<Option<Employee>>;

    /// Inserts a new record and returns it with its assigned id.
    async fn create(&self, new: NewEmployee) -> EngineResult<Employee>;

    /// Merges a patch into an existing record and writes the whole record
    /// back. Returns `None` when the id is absent.
    async fn replace(&self, id: Uuid, patch: EmployeePatch) -> EngineResult<Option<Employee>>;

    /// Removes a record. Returns `false` when the id was absent.
    async fn delete(&self, id: Uuid) -> EngineResult<bool>;

    /// Runs a read-modify-write mutation against one record.
    ///
    /// Returns the updated record, `None` when the id is absent, or the
    /// mutation's own error with no write performed.
    async fn apply(&self, id: Uuid, mutation: AttendanceMutation)
    -> EngineResult<Option<Employee>>;
}

/// Storage contract for designation records.
#[async_trait]
pub trait DesignationStore: Send + Sync {
    /// Returns designations in insertion order; with `only_active`, the
    /// deactivated ones are filtered out.
    async fn list(&self, only_active: bool) -> EngineResult<Vec<Designation>>;

    /// Returns one record, or `None` when the id is absent.
    async fn get(&self, id: Uuid) -> EngineResult<Option<Designation>>;

    /// Inserts a new record and returns it with its assigned id.
    async fn create(&self, new: NewDesignation) -> EngineResult<Designation>;

    /// Merges a patch into an existing record. Returns `None` when the id
    /// is absent.
    async fn replace(&self, id: Uuid, patch: DesignationPatch)
    -> EngineResult<Option<Designation>>;

    /// Removes a record. Returns `false` when the id was absent.
    async fn delete(&self, id: Uuid) -> EngineResult<bool>;
}

/// Storage contract for archived salary sheets.
#[async_trait]
pub trait SalarySheetStore: Send + Sync {
    /// Returns all sheets in insertion order.
    async fn list(&self) -> EngineResult<Vec<SalarySheet>>;

    /// Returns one sheet, or `None` when the id is absent.
    async fn get(&self, id: Uuid) -> EngineResult<Option<SalarySheet>>;

    /// Inserts a new sheet and returns it with its assigned id.
    async fn create(&self, new: NewSalarySheet) -> EngineResult<SalarySheet>;

    /// Merges a patch into an existing sheet. Returns `None` when the id
    /// is absent.
    async fn replace(&self, id: Uuid, patch: SalarySheetPatch)
    -> EngineResult<Option<SalarySheet>>;

    /// Removes a sheet. Returns `false` when the id was absent.
    async fn delete(&self, id: Uuid) -> EngineResult<bool>;
}
