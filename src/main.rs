use brickline_content::config::{get_config, init_config};
use brickline_content::ContentClient;
use tracing::{error, info};

/// Content smoke check: verifies every collection is reachable with the
/// configured credentials. Run before a deploy or after changing keys.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let client = ContentClient::new(get_config())?;

    let mut failures = 0;

    match client.projects.fetch_all().await {
        Ok(items) => info!(count = items.len(), "projects reachable"),
        Err(e) => {
            failures += 1;
            error!(error = %e, "projects fetch failed");
        }
    }
    match client.services.fetch_all().await {
        Ok(items) => info!(count = items.len(), "services reachable"),
        Err(e) => {
            failures += 1;
            error!(error = %e, "services fetch failed");
        }
    }
    match client.staff.fetch_all().await {
        Ok(items) => info!(count = items.len(), "staff reachable"),
        Err(e) => {
            failures += 1;
            error!(error = %e, "staff fetch failed");
        }
    }
    match client.vacancies.fetch_all().await {
        Ok(items) => info!(count = items.len(), "vacancies reachable"),
        Err(e) => {
            failures += 1;
            error!(error = %e, "vacancies fetch failed");
        }
    }
    match client.vacancies.fetch_active().await {
        Ok(items) => info!(count = items.len(), "active vacancy filter reachable"),
        Err(e) => {
            failures += 1;
            error!(error = %e, "active vacancy fetch failed");
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} collection fetch(es) failed");
    }
    info!("content backend healthy");
    Ok(())
}
