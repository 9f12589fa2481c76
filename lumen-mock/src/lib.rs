use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::condition::LightMonitor;
use crate::publisher::{PublishError, Publisher};
use crate::settings::Settings;
use crate::simulate::{LightSensor, SimulatedSensor};

pub mod condition;
pub mod publisher;
pub mod settings;
pub mod simulate;

/// Sample the simulated sensor until interrupted, pushing every lighting change.
pub async fn run(settings: &Arc<Settings>) -> Result<(), PublishError> {
    let publisher = Publisher::new(settings.gateway.clone())?;
    let mut sensor = SimulatedSensor::new(settings.mock.day_length_ticks);
    let mut monitor = LightMonitor::new(settings.mock.thresholds(), sensor.read());

    tracing::info!(
        "publishing to {} every {}s, baseline {}",
        settings.gateway.address,
        settings.mock.interval_secs,
        monitor.baseline()
    );

    let mut interval = time::interval(Duration::from_secs(settings.mock.interval_secs.max(1)));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let reading = sensor.read();
                tracing::trace!("light level {}", reading);

                let Some(change) = monitor.observe(reading) else {
                    continue;
                };

                match publisher.publish(&change).await {
                    Ok(Some(_)) => {},
                    Ok(None) => tracing::debug!("change {} -> {} concerns no group", change.k0, change.k1),
                    Err(e) => tracing::error!("failed to publish change {} -> {}: {}", change.k0, change.k1, e),
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("publisher shutting down");
                return Ok(());
            }
        }
    }
}
