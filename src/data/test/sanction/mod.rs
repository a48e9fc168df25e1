use crate::{
    data::sanction::SanctionRepository,
    error::AppError,
    model::sanction::{CreateSanctionParam, SanctionKind, UpdateSanctionParam},
};
use test_utils::{
    builder::TestBuilder,
    factory::{employee::create_employee, sanction::create_sanction},
};

mod create;
mod get_paginated;
mod update;

fn tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .with_table(entity::prelude::Sanction)
}
