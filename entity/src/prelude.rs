pub use super::announcement::Entity as Announcement;
pub use super::audit_log::Entity as AuditLog;
pub use super::bonus_payment::Entity as BonusPayment;
pub use super::calendar_event::Entity as CalendarEvent;
pub use super::department::Entity as Department;
pub use super::discord_role::Entity as DiscordRole;
pub use super::employee::Entity as Employee;
pub use super::employee_department::Entity as EmployeeDepartment;
pub use super::evidence::Entity as Evidence;
pub use super::investigation::Entity as Investigation;
pub use super::notification::Entity as Notification;
pub use super::rank::Entity as Rank;
pub use super::role_permission::Entity as RolePermission;
pub use super::sanction::Entity as Sanction;
pub use super::training::Entity as Training;
pub use super::training_attendance::Entity as TrainingAttendance;
pub use super::treasury_account::Entity as TreasuryAccount;
pub use super::treasury_transaction::Entity as TreasuryTransaction;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::work_log::Entity as WorkLog;
