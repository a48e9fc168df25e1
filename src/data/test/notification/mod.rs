use crate::{data::notification::NotificationRepository, error::AppError};
use test_utils::builder::TestBuilder;

mod mark_read;

fn tables() -> TestBuilder {
    TestBuilder::new().with_table(entity::prelude::Notification)
}
