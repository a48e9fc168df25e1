pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_user_table;
mod m20260701_000002_create_discord_role_table;
mod m20260701_000003_create_user_role_table;
mod m20260701_000004_create_role_permission_table;
mod m20260702_000005_create_rank_table;
mod m20260702_000006_create_department_table;
mod m20260702_000007_create_employee_table;
mod m20260702_000008_create_employee_department_table;
mod m20260703_000009_create_sanction_table;
mod m20260703_000010_create_investigation_table;
mod m20260703_000011_create_evidence_table;
mod m20260704_000012_create_training_table;
mod m20260704_000013_create_training_attendance_table;
mod m20260705_000014_create_treasury_account_table;
mod m20260705_000015_create_treasury_transaction_table;
mod m20260706_000016_create_announcement_table;
mod m20260706_000017_create_calendar_event_table;
mod m20260706_000018_create_notification_table;
mod m20260707_000019_create_bonus_payment_table;
mod m20260707_000020_create_work_log_table;
mod m20260707_000021_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_user_table::Migration),
            Box::new(m20260701_000002_create_discord_role_table::Migration),
            Box::new(m20260701_000003_create_user_role_table::Migration),
            Box::new(m20260701_000004_create_role_permission_table::Migration),
            Box::new(m20260702_000005_create_rank_table::Migration),
            Box::new(m20260702_000006_create_department_table::Migration),
            Box::new(m20260702_000007_create_employee_table::Migration),
            Box::new(m20260702_000008_create_employee_department_table::Migration),
            Box::new(m20260703_000009_create_sanction_table::Migration),
            Box::new(m20260703_000010_create_investigation_table::Migration),
            Box::new(m20260703_000011_create_evidence_table::Migration),
            Box::new(m20260704_000012_create_training_table::Migration),
            Box::new(m20260704_000013_create_training_attendance_table::Migration),
            Box::new(m20260705_000014_create_treasury_account_table::Migration),
            Box::new(m20260705_000015_create_treasury_transaction_table::Migration),
            Box::new(m20260706_000016_create_announcement_table::Migration),
            Box::new(m20260706_000017_create_calendar_event_table::Migration),
            Box::new(m20260706_000018_create_notification_table::Migration),
            Box::new(m20260707_000019_create_bonus_payment_table::Migration),
            Box::new(m20260707_000020_create_work_log_table::Migration),
            Box::new(m20260707_000021_create_audit_log_table::Migration),
        ]
    }
}
