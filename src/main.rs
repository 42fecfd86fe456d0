use serde_json::json;
use tracing::{error, info, warn, Instrument};

use employee_service::{setup_tracing, EmployeeSystem, Error, SystemConfig};

/// Logs a rejected call the way a transport layer would map it.
fn report(operation: &str, err: &Error) {
    match err.as_service_error() {
        Some(service_error) => warn!(
            operation,
            status = service_error.status_code(),
            message = %service_error,
            "Request rejected"
        ),
        None => error!(operation, error = %err, "Request failed"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SystemConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting application with employee system");
    let system = EmployeeSystem::new(&config);
    let employees = &system.employees;

    let span = tracing::info_span!("employee_creation");
    let created = async {
        employees
            .add(&json!({
                "name": "Alice",
                "email": "alice@example.com",
                "position": "Engineer",
                "salary": 5200,
            }))
            .await
    }
    .instrument(span)
    .await?;
    let id = created.id.to_string();
    info!(employee_id = %id, "Employee created successfully");

    let updated = employees.update(&id, &json!({ "salary": 5600 })).await?;
    info!(employee = %serde_json::to_string(&updated)?, "Employee updated");

    let all = employees.list().await?;
    info!(employee_count = all.len(), "Retrieved employee list");

    // Each of these is rejected before or after reaching the store.
    if let Err(e) = employees.add(&json!({ "name": "", "salary": -1 })).await {
        report("add", &e);
    }
    if let Err(e) = employees.get_by_id("007").await {
        report("get_by_id", &e);
    }
    if let Err(e) = employees.get_by_id("999").await {
        report("get_by_id", &e);
    }

    let removed = employees.remove(&id).await?;
    info!(employee_id = %removed.id, "Employee removed");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
