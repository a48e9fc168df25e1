use crate::{
    data::employee::EmployeeRepository,
    error::AppError,
    model::employee::{
        EmployeeFilter, EmployeeStatus, RosterUpsertParam, UpdateEmployeeParam,
    },
};
use test_utils::{builder::TestBuilder, factory::employee::EmployeeFactory};

mod get_paginated;
mod mark_inactive_missing;
mod update;
mod upsert_from_roster;
