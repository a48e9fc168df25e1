//! Business logic orchestration between controllers and the data layer.

pub mod accrual;
pub mod admin;
pub mod auth;
pub mod calendar;
pub mod notify;
pub mod permission;
pub mod roster;
pub mod treasury;
