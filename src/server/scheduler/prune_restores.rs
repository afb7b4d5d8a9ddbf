use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, store::ConfigStore};

/// Pending restores older than this are assumed stale, e.g. after a missed leave event.
pub const PENDING_RESTORE_MAX_AGE_DAYS: i64 = 30;

/// Starts the scheduler pruning stale pending restores.
///
/// Runs at the start of every hour.
///
/// # Arguments
/// - `store`: Configuration store holding the pending restores
pub async fn start_scheduler(store: Arc<dyn ConfigStore>) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            if let Err(e) = prune_pending_restores(store.as_ref()).await {
                tracing::error!("Error pruning pending restores: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Pending restore pruning scheduler started");

    Ok(scheduler)
}

/// Removes pending restores older than [`PENDING_RESTORE_MAX_AGE_DAYS`].
///
/// # Returns
/// - `Ok(u64)` - Number of records removed
pub async fn prune_pending_restores(store: &dyn ConfigStore) -> Result<u64, AppError> {
    let cutoff = Utc::now() - Duration::days(PENDING_RESTORE_MAX_AGE_DAYS);
    let pruned = store.prune_identities(cutoff).await?;

    if pruned > 0 {
        tracing::info!("Pruned {} stale pending restores", pruned);
    }

    Ok(pruned)
}
