//! Treasury data repository.
//!
//! Balances are derived from the transaction ledger, never stored. The
//! balance and insert helpers are generic over the connection so the
//! treasury service can run them inside a transaction when posting a
//! withdrawal.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::treasury::{CreateTransactionParam, TreasuryAccount, TreasuryTransaction},
};

pub struct TreasuryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TreasuryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all accounts with their derived balances.
    pub async fn get_accounts(&self) -> Result<Vec<TreasuryAccount>, AppError> {
        let models = entity::prelude::TreasuryAccount::find()
            .order_by_asc(entity::treasury_account::Column::Id)
            .all(self.db)
            .await?;

        let mut accounts = Vec::with_capacity(models.len());
        for model in models {
            let balance = Self::balance_in(self.db, model.id).await?;
            accounts.push(TreasuryAccount::from_entity(model, balance));
        }

        Ok(accounts)
    }

    /// Finds an account with its derived balance.
    pub async fn find_account(&self, id: i32) -> Result<Option<TreasuryAccount>, AppError> {
        let Some(model) = entity::prelude::TreasuryAccount::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let balance = Self::balance_in(self.db, model.id).await?;
        Ok(Some(TreasuryAccount::from_entity(model, balance)))
    }

    /// Gets the transaction ledger of an account, newest first.
    pub async fn get_transactions(
        &self,
        account_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<TreasuryTransaction>, u64), AppError> {
        let paginator = entity::prelude::TreasuryTransaction::find()
            .filter(entity::treasury_transaction::Column::AccountId.eq(account_id))
            .order_by_desc(entity::treasury_transaction::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        let transactions = models
            .into_iter()
            .map(TreasuryTransaction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((transactions, total))
    }

    /// Computes the balance of an account over the given connection.
    ///
    /// Generic so the treasury service can call it inside a transaction.
    pub async fn balance_in<C: ConnectionTrait>(
        conn: &C,
        account_id: i32,
    ) -> Result<i64, AppError> {
        let total: Option<Option<i64>> = entity::prelude::TreasuryTransaction::find()
            .select_only()
            .column_as(entity::treasury_transaction::Column::Amount.sum(), "total")
            .filter(entity::treasury_transaction::Column::AccountId.eq(account_id))
            .into_tuple()
            .one(conn)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Inserts a ledger entry over the given connection.
    ///
    /// The stored amount is signed according to the transaction kind.
    pub async fn insert_transaction_in<C: ConnectionTrait>(
        conn: &C,
        param: CreateTransactionParam,
        signed_amount: i64,
    ) -> Result<TreasuryTransaction, AppError> {
        let model = entity::prelude::TreasuryTransaction::insert(
            entity::treasury_transaction::ActiveModel {
                account_id: ActiveValue::Set(param.account_id),
                amount: ActiveValue::Set(signed_amount),
                kind: ActiveValue::Set(param.kind.as_str().to_string()),
                memo: ActiveValue::Set(param.memo),
                actor_user_id: ActiveValue::Set(param.actor_user_id.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .exec_with_returning(conn)
        .await?;

        TreasuryTransaction::from_entity(model)
    }
}
