//! Periodic guild roster reconciliation.
//!
//! The gateway events keep records current in real time; this hourly pass
//! is the safety net for anything missed while disconnected.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::Job;

use crate::{
    error::AppError,
    service::{permission::PermissionResolver, roster::RosterSyncService},
};

const SYNC_SCHEDULE: &str = "0 0 * * * *";

pub fn job(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    guild_id: u64,
    permissions: PermissionResolver,
) -> Result<Job, AppError> {
    let job = Job::new_async_tz(SYNC_SCHEDULE, chrono::Utc, move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();
        let permissions = permissions.clone();

        Box::pin(async move {
            match RosterSyncService::new(&db).sync_guild(&http, guild_id).await {
                Ok(outcome) => {
                    tracing::debug!(
                        "Scheduled roster sync: {} synced, {} deactivated",
                        outcome.synced,
                        outcome.deactivated
                    );
                    permissions.invalidate_all();
                }
                Err(e) => {
                    tracing::error!("Scheduled roster sync failed: {}", e);
                }
            }
        })
    })?;

    Ok(job)
}
