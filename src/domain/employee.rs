use serde::Serialize;

use crate::identifier::EntityId;

/// Represents an employee record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub position: Option<String>,
    pub salary: f64,
}

/// Normalized payload for creating a new employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub position: Option<String>,
    pub salary: f64,
}

/// Normalized payload for updating an existing employee.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}
