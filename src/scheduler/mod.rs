//! Cron jobs for automated tasks.

pub mod bonus_rollover;
pub mod roster_sync;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::JobScheduler;

use crate::{error::AppError, service::permission::PermissionResolver};

/// Registers and starts all scheduled jobs.
///
/// The returned scheduler must be kept alive for the lifetime of the
/// process; dropping it stops the jobs.
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    guild_id: u64,
    permissions: PermissionResolver,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(bonus_rollover::job(db.clone())?).await?;
    scheduler
        .add(roster_sync::job(db, discord_http, guild_id, permissions)?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(scheduler)
}
