//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data-layer
//! boundary; controllers convert them into wire DTOs (`crate::dto`) on the way
//! out. Parameter structs carry validated operation inputs into the service
//! and data layers.

pub mod announcement;
pub mod audit;
pub mod bonus;
pub mod calendar;
pub mod department;
pub mod employee;
pub mod investigation;
pub mod notification;
pub mod rank;
pub mod role;
pub mod sanction;
pub mod training;
pub mod treasury;
pub mod user;
