use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{ResourceActor, ResourceClient};
use crate::config::SystemConfig;
use crate::domain::Employee;
use crate::employee_actor::EmployeeSchema;
use crate::service::EntityService;

/// Service layer for employees backed by the in-memory store actor.
pub type EmployeeService = EntityService<Employee, ResourceClient<Employee>, EmployeeSchema>;

/// The main application system.
///
/// Responsible for starting the store actor, wiring the service to it, and handling shutdown.
pub struct EmployeeSystem {
    pub employees: EmployeeService,
    handle: JoinHandle<()>,
}

impl EmployeeSystem {
    pub fn new(config: &SystemConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting employee system");

        let (actor, client) = ResourceActor::<Employee>::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());

        Self {
            employees: EntityService::new(client, EmployeeSchema),
            handle,
        }
    }

    /// Stops the store once every clone of the service has been dropped.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");
        drop(self.employees);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
