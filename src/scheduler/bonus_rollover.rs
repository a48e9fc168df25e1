//! Weekly bonus week rollover.
//!
//! Runs shortly after the Monday 00:00 UTC week boundary and marks every
//! payment of finished weeks as submitted. The close is idempotent and
//! catches up weeks missed while the process was down.

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::Job;

use crate::{error::AppError, service::accrual::AccrualService};

/// Monday 00:05 UTC, giving in-flight Sunday-night accruals a margin.
const ROLLOVER_SCHEDULE: &str = "0 5 0 * * Mon";

pub fn job(db: DatabaseConnection) -> Result<Job, AppError> {
    let job = Job::new_async_tz(ROLLOVER_SCHEDULE, chrono::Utc, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match AccrualService::new(&db).close_previous_weeks().await {
                Ok(closed) => {
                    tracing::info!("Bonus rollover closed {} payments", closed);
                }
                Err(e) => {
                    tracing::error!("Bonus rollover failed: {}", e);
                }
            }
        })
    })?;

    Ok(job)
}
