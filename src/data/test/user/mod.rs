use crate::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use test_utils::builder::TestBuilder;

mod admin_exists;
mod upsert;
