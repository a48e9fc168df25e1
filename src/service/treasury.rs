//! Treasury business logic.
//!
//! Posting a withdrawal checks the derived balance inside a database
//! transaction so two concurrent withdrawals can't overdraw the account.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::treasury::TreasuryRepository,
    error::AppError,
    model::treasury::{CreateTransactionParam, TransactionKind, TreasuryTransaction},
};

pub struct TreasuryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TreasuryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a deposit or withdrawal to an account.
    ///
    /// Withdrawals exceeding the current balance are rejected with a 400.
    pub async fn post_transaction(
        &self,
        param: CreateTransactionParam,
    ) -> Result<TreasuryTransaction, AppError> {
        if param.amount <= 0 {
            return Err(AppError::BadRequest(
                "Transaction amount must be positive".to_string(),
            ));
        }

        let treasury_repo = TreasuryRepository::new(self.db);
        if treasury_repo.find_account(param.account_id).await?.is_none() {
            return Err(AppError::NotFound("Treasury account not found".to_string()));
        }

        let signed_amount = match param.kind {
            TransactionKind::Deposit => param.amount,
            TransactionKind::Withdrawal => -param.amount,
        };

        let txn = self.db.begin().await?;

        if param.kind == TransactionKind::Withdrawal {
            let balance = TreasuryRepository::balance_in(&txn, param.account_id).await?;
            if balance < param.amount {
                return Err(AppError::BadRequest(format!(
                    "Insufficient funds: balance is {}, requested {}",
                    balance, param.amount
                )));
            }
        }

        let transaction =
            TreasuryRepository::insert_transaction_in(&txn, param, signed_amount).await?;

        txn.commit().await?;

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, ActiveValue};
    use test_utils::builder::TestBuilder;

    async fn setup() -> (test_utils::context::TestContext, i32) {
        let test = TestBuilder::new()
            .with_table(entity::prelude::TreasuryAccount)
            .with_table(entity::prelude::TreasuryTransaction)
            .build()
            .await
            .unwrap();

        let account = entity::treasury_account::ActiveModel {
            name: ActiveValue::Set("General Fund".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(test.db.as_ref().unwrap())
        .await
        .unwrap();

        (test, account.id)
    }

    fn param(account_id: i32, kind: TransactionKind, amount: i64) -> CreateTransactionParam {
        CreateTransactionParam {
            account_id,
            kind,
            amount,
            memo: None,
            actor_user_id: 42,
        }
    }

    #[tokio::test]
    async fn deposits_raise_the_balance() -> Result<(), AppError> {
        let (test, account_id) = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TreasuryService::new(db);
        service
            .post_transaction(param(account_id, TransactionKind::Deposit, 5000))
            .await?;
        service
            .post_transaction(param(account_id, TransactionKind::Deposit, 2500))
            .await?;

        let account = TreasuryRepository::new(db)
            .find_account(account_id)
            .await?
            .unwrap();
        assert_eq!(account.balance, 7500);

        Ok(())
    }

    #[tokio::test]
    async fn withdrawal_within_balance_is_posted() -> Result<(), AppError> {
        let (test, account_id) = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TreasuryService::new(db);
        service
            .post_transaction(param(account_id, TransactionKind::Deposit, 5000))
            .await?;
        let withdrawal = service
            .post_transaction(param(account_id, TransactionKind::Withdrawal, 3000))
            .await?;

        assert_eq!(withdrawal.kind, TransactionKind::Withdrawal);
        assert_eq!(withdrawal.amount, 3000);

        let account = TreasuryRepository::new(db)
            .find_account(account_id)
            .await?
            .unwrap();
        assert_eq!(account.balance, 2000);

        Ok(())
    }

    #[tokio::test]
    async fn overdraw_is_rejected_and_leaves_balance_intact() -> Result<(), AppError> {
        let (test, account_id) = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TreasuryService::new(db);
        service
            .post_transaction(param(account_id, TransactionKind::Deposit, 1000))
            .await?;

        let denied = service
            .post_transaction(param(account_id, TransactionKind::Withdrawal, 1500))
            .await;
        assert!(matches!(denied, Err(AppError::BadRequest(_))));

        let account = TreasuryRepository::new(db)
            .find_account(account_id)
            .await?
            .unwrap();
        assert_eq!(account.balance, 1000);

        Ok(())
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected() {
        let (test, account_id) = setup().await;
        let db = test.db.as_ref().unwrap();

        let service = TreasuryService::new(db);
        let zero = service
            .post_transaction(param(account_id, TransactionKind::Deposit, 0))
            .await;
        let negative = service
            .post_transaction(param(account_id, TransactionKind::Deposit, -100))
            .await;

        assert!(matches!(zero, Err(AppError::BadRequest(_))));
        assert!(matches!(negative, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let (test, _) = setup().await;
        let db = test.db.as_ref().unwrap();

        let denied = TreasuryService::new(db)
            .post_transaction(param(999, TransactionKind::Deposit, 100))
            .await;

        assert!(matches!(denied, Err(AppError::NotFound(_))));
    }
}
