use serde_json::{Map, Value};

use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use crate::schema::{Schema, Validation, Violation};

const KNOWN_FIELDS: [&str; 4] = ["name", "email", "position", "salary"];
const MAX_TEXT_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// Field rules for employee payloads.
///
/// Violations are collected rather than stopping at the first one: known
/// fields in declaration order, then unknown keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeSchema;

impl Schema<Employee> for EmployeeSchema {
    fn validate_create(&self, payload: &Value) -> Validation<EmployeeCreate> {
        let Some(object) = payload.as_object() else {
            return Validation::Invalid(vec![Violation::new("\"value\" must be of type object")]);
        };

        let mut violations = Vec::new();
        let fields = read_fields(object, Presence::Required, &mut violations);

        match fields {
            EmployeePatch {
                name: Some(name),
                email: Some(email),
                position,
                salary: Some(salary),
            } if violations.is_empty() => Validation::Valid(EmployeeCreate {
                name,
                email,
                position,
                salary,
            }),
            _ => Validation::Invalid(violations),
        }
    }

    fn validate_update(&self, payload: &Value) -> Validation<EmployeePatch> {
        let Some(object) = payload.as_object() else {
            return Validation::Invalid(vec![Violation::new("\"value\" must be of type object")]);
        };
        if object.is_empty() {
            return Validation::Invalid(vec![Violation::new("\"value\" must have at least 1 key")]);
        }

        let mut violations = Vec::new();
        let patch = read_fields(object, Presence::Optional, &mut violations);

        if violations.is_empty() {
            Validation::Valid(patch)
        } else {
            Validation::Invalid(violations)
        }
    }
}

fn read_fields(
    object: &Map<String, Value>,
    presence: Presence,
    violations: &mut Vec<Violation>,
) -> EmployeePatch {
    let name = read_text(object, "name", presence, violations);
    let email = read_text(object, "email", presence, violations).filter(|email| {
        let valid = looks_like_email(email);
        if !valid {
            violations.push(Violation::new("\"email\" must be a valid email"));
        }
        valid
    });
    let position = read_text(object, "position", Presence::Optional, violations);
    let salary = read_salary(object, presence, violations);

    for key in object.keys().filter(|key| !KNOWN_FIELDS.contains(&key.as_str())) {
        violations.push(Violation::new(format!("\"{key}\" is not allowed")));
    }

    EmployeePatch {
        name,
        email,
        position,
        salary,
    }
}

fn read_text(
    object: &Map<String, Value>,
    key: &str,
    presence: Presence,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match object.get(key) {
        None => {
            if presence == Presence::Required {
                violations.push(Violation::new(format!("\"{key}\" is required")));
            }
            None
        }
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                violations.push(Violation::new(format!("\"{key}\" is not allowed to be empty")));
                None
            } else if trimmed.chars().count() > MAX_TEXT_LEN {
                violations.push(Violation::new(format!(
                    "\"{key}\" length must be less than or equal to {MAX_TEXT_LEN} characters long"
                )));
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Some(_) => {
            violations.push(Violation::new(format!("\"{key}\" must be a string")));
            None
        }
    }
}

fn read_salary(
    object: &Map<String, Value>,
    presence: Presence,
    violations: &mut Vec<Violation>,
) -> Option<f64> {
    match object.get("salary") {
        None => {
            if presence == Presence::Required {
                violations.push(Violation::new("\"salary\" is required"));
            }
            None
        }
        Some(Value::Number(number)) => match number.as_f64() {
            Some(salary) if salary.is_finite() && salary > 0.0 => Some(salary),
            _ => {
                violations.push(Violation::new("\"salary\" must be a positive number"));
                None
            }
        },
        Some(_) => {
            violations.push(Violation::new("\"salary\" must be a number"));
            None
        }
    }
}

/// One `@` with a non-empty local part and a dotted domain.
fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !text.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages<T>(validation: Validation<T>) -> Vec<String> {
        match validation {
            Validation::Valid(_) => panic!("expected violations"),
            Validation::Invalid(violations) => violations.into_iter().map(|v| v.message).collect(),
        }
    }

    #[test]
    fn test_create_normalizes_valid_payload() {
        let payload = json!({
            "name": "  Grace Hopper ",
            "email": "grace@example.com",
            "salary": 4200,
        });

        let validation = EmployeeSchema.validate_create(&payload);

        assert_eq!(
            validation,
            Validation::Valid(EmployeeCreate {
                name: "Grace Hopper".into(),
                email: "grace@example.com".into(),
                position: None,
                salary: 4200.0,
            })
        );
    }

    #[test]
    fn test_create_reports_every_missing_field_in_order() {
        let validation = EmployeeSchema.validate_create(&json!({}));
        assert_eq!(
            messages(validation),
            vec!["\"name\" is required", "\"email\" is required", "\"salary\" is required"]
        );
    }

    #[test]
    fn test_create_reports_type_and_format_errors() {
        let payload = json!({
            "name": 12,
            "email": "not-an-email",
            "position": "",
            "salary": -3,
            "badge": "x",
        });

        assert_eq!(
            messages(EmployeeSchema.validate_create(&payload)),
            vec![
                "\"name\" must be a string",
                "\"email\" must be a valid email",
                "\"position\" is not allowed to be empty",
                "\"salary\" must be a positive number",
                "\"badge\" is not allowed",
            ]
        );
    }

    #[test]
    fn test_create_rejects_overlong_name() {
        let payload = json!({
            "name": "x".repeat(MAX_TEXT_LEN + 1),
            "email": "a@b.io",
            "salary": 1,
        });
        assert_eq!(
            messages(EmployeeSchema.validate_create(&payload)),
            vec!["\"name\" length must be less than or equal to 100 characters long"]
        );
    }

    #[test]
    fn test_rejects_non_object_payloads() {
        assert_eq!(
            messages(EmployeeSchema.validate_create(&json!([1, 2]))),
            vec!["\"value\" must be of type object"]
        );
        assert_eq!(
            messages(EmployeeSchema.validate_update(&Value::Null)),
            vec!["\"value\" must be of type object"]
        );
    }

    #[test]
    fn test_update_accepts_partial_payload() {
        let validation = EmployeeSchema.validate_update(&json!({ "salary": 99.5 }));
        assert_eq!(
            validation,
            Validation::Valid(EmployeePatch {
                salary: Some(99.5),
                ..EmployeePatch::default()
            })
        );
    }

    #[test]
    fn test_update_requires_at_least_one_key() {
        assert_eq!(
            messages(EmployeeSchema.validate_update(&json!({}))),
            vec!["\"value\" must have at least 1 key"]
        );
    }

    #[test]
    fn test_update_rejects_unknown_keys() {
        assert_eq!(
            messages(EmployeeSchema.validate_update(&json!({ "id": 3 }))),
            vec!["\"id\" is not allowed"]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.io"));
        assert!(looks_like_email("first.last@mail.example.com"));
        assert!(!looks_like_email("@b.io"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.io"));
        assert!(!looks_like_email("a@b@c.io"));
        assert!(!looks_like_email("a b@c.io"));
    }
}
