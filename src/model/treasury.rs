//! Treasury domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    dto::treasury::{TreasuryAccountDto, TreasuryTransactionDto},
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

/// Treasury account with its derived balance.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasuryAccount {
    pub id: i32,
    pub name: String,
    /// Sum of all transaction amounts on the account.
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl TreasuryAccount {
    pub fn from_entity(entity: entity::treasury_account::Model, balance: i64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            balance,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TreasuryAccountDto {
        TreasuryAccountDto {
            id: self.id,
            name: self.name,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

/// Ledger entry on a treasury account.
///
/// The stored amount is signed; the domain model carries the unsigned amount
/// plus the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasuryTransaction {
    pub id: i32,
    pub account_id: i32,
    pub amount: i64,
    pub kind: TransactionKind,
    pub memo: Option<String>,
    pub actor_user_id: u64,
    pub created_at: DateTime<Utc>,
}

impl TreasuryTransaction {
    pub fn from_entity(entity: entity::treasury_transaction::Model) -> Result<Self, AppError> {
        let actor_user_id = parse_u64_from_string(entity.actor_user_id)?;
        let kind = TransactionKind::parse(&entity.kind).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown transaction kind '{}' for transaction {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            account_id: entity.account_id,
            amount: entity.amount.abs(),
            kind,
            memo: entity.memo,
            actor_user_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> TreasuryTransactionDto {
        TreasuryTransactionDto {
            id: self.id,
            account_id: self.account_id,
            amount: self.amount,
            kind: self.kind.as_str().to_string(),
            memo: self.memo,
            actor_user_id: self.actor_user_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for posting a transaction to an account.
#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub account_id: i32,
    pub kind: TransactionKind,
    /// Unsigned amount; the sign is derived from `kind` at insert time.
    pub amount: i64,
    pub memo: Option<String>,
    pub actor_user_id: u64,
}
