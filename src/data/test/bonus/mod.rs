use chrono::NaiveDate;

use crate::{
    data::bonus::{BonusPaymentRepository, WorkLogRepository},
    error::AppError,
    model::bonus::BonusKind,
};
use test_utils::{builder::TestBuilder, factory::employee::create_employee};

mod bump;
mod close_weeks_before;
mod create;

fn tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .with_table(entity::prelude::BonusPayment)
        .with_table(entity::prelude::WorkLog)
}

fn week(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
