use crate::actor_framework::Entity;
use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use crate::identifier::EntityId;

impl Entity for Employee {
    type CreateParams = EmployeeCreate;
    type Patch = EmployeePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new Employee from validated creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `params` - Normalized name, email, position and salary
    fn from_create_params(id: EntityId, params: EmployeeCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            position: params.position,
            salary: params.salary,
        }
    }

    /// Applies every field present in the patch.
    fn on_update(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(position) = patch.position {
            self.position = Some(position);
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_touches_only_present_fields() {
        let mut employee = Employee::from_create_params(
            EntityId::FIRST,
            EmployeeCreate {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                position: None,
                salary: 1000.0,
            },
        );

        employee.on_update(EmployeePatch {
            position: Some("Engineer".into()),
            salary: Some(1500.0),
            ..EmployeePatch::default()
        });

        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.email, "ada@example.com");
        assert_eq!(employee.position.as_deref(), Some("Engineer"));
        assert_eq!(employee.salary, 1500.0);
    }
}
