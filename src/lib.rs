//! # Employee Service
//!
//! Application-layer service for employee records: validates identifiers and
//! payloads, delegates to a persistence collaborator, and reports failures
//! through a single error taxonomy.
//!
//! - [`identifier`] - canonical positive-integer identifiers → [`is_valid_identifier`]
//! - [`error`] - [`ServiceError`] for callers, [`PersistenceError`] for infrastructure
//! - [`schema`] - the payload validation seam, implemented by [`EmployeeSchema`]
//! - [`repository`] - the persistence seam, implemented by [`ResourceClient`]
//! - [`service`] - [`EntityService`], the validate → delegate → reinterpret flow
//! - [`app_system`] - startup, shutdown and tracing setup → [`EmployeeSystem`]
//!
//! ```no_run
//! # async fn demo() -> employee_service::Result<()> {
//! use employee_service::{EmployeeSystem, SystemConfig};
//!
//! let system = EmployeeSystem::new(&SystemConfig::default());
//! let created = system
//!     .employees
//!     .add(&serde_json::json!({ "name": "Ada", "email": "ada@example.com", "salary": 1000 }))
//!     .await?;
//! let fetched = system.employees.get_by_id(&created.id.to_string()).await?;
//! assert_eq!(created, fetched);
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod employee_actor;
pub mod error;
pub mod identifier;
pub mod repository;
pub mod schema;
pub mod service;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, ResourceActor, ResourceClient};
pub use app_system::{setup_tracing, EmployeeService, EmployeeSystem};
pub use config::{ConfigError, SystemConfig};
pub use domain::{Employee, EmployeeCreate, EmployeePatch};
pub use employee_actor::EmployeeSchema;
pub use error::{Error, PersistenceError, Result, ServiceError};
pub use identifier::{is_valid_identifier, parse_identifier, EntityId};
pub use repository::Repository;
pub use schema::{Schema, Validation, Violation};
pub use service::EntityService;
