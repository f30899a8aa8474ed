//! Designation (job title) model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job title that employees can hold.
///
/// Deactivated designations stay on record (`is_active = 0`) and drop out
/// of the default listing; employees keep the denormalized name either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designation {
    /// Unique identifier, generated at creation.
    pub id: Uuid,
    /// Title text, e.g. "Manager".
    pub name: String,
    /// 1 when active, 0 when deactivated.
    #[serde(rename = "isActive")]
    pub is_active: i32,
}

impl Designation {
    /// Returns true when the designation appears in the default listing.
    pub fn active(&self) -> bool {
        self.is_active != 0
    }
}

/// Fields for a new designation; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDesignation {
    /// Title text.
    pub name: String,
    /// 1 when active, 0 when deactivated.
    pub is_active: i32,
}

impl NewDesignation {
    /// Materializes the record with a freshly generated id.
    pub fn into_designation(self) -> Designation {
        Designation {
            id: Uuid::new_v4(),
            name: self.name,
            is_active: self.is_active,
        }
    }
}

/// A partial update to a designation record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignationPatch {
    /// New title text, if changing.
    pub name: Option<String>,
    /// New active flag, if changing.
    pub is_active: Option<i32>,
}

impl DesignationPatch {
    /// Merges the present fields into an existing record.
    pub fn merge_into(self, designation: &mut Designation) {
        if let Some(name) = self.name {
            designation.name = name;
        }
        if let Some(is_active) = self.is_active {
            designation.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag() {
        let mut designation = NewDesignation {
            name: "Manager".to_string(),
            is_active: 1,
        }
        .into_designation();
        assert!(designation.active());

        designation.is_active = 0;
        assert!(!designation.active());
    }

    #[test]
    fn test_serializes_is_active_in_camel_case() {
        let designation = NewDesignation {
            name: "Worker".to_string(),
            is_active: 1,
        }
        .into_designation();

        let value = serde_json::to_value(&designation).unwrap();
        assert_eq!(value["isActive"], 1);
        assert!(value.get("is_active").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let designation = NewDesignation {
            name: "Supervisor".to_string(),
            is_active: 0,
        }
        .into_designation();

        let json = serde_json::to_string(&designation).unwrap();
        let back: Designation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, designation);
    }

    #[test]
    fn test_patch_deactivates_without_renaming() {
        let mut designation = NewDesignation {
            name: "Assistant".to_string(),
            is_active: 1,
        }
        .into_designation();

        DesignationPatch {
            name: None,
            is_active: Some(0),
        }
        .merge_into(&mut designation);

        assert_eq!(designation.name, "Assistant");
        assert_eq!(designation.is_active, 0);
    }
}
