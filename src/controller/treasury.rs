//! Treasury endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    data::{audit::AuditLogRepository, treasury::TreasuryRepository},
    dto::api::PageQuery,
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::treasury::{CreateTransactionParam, TransactionKind},
    realtime::hub::EventAction,
    service::treasury::TreasuryService,
    state::AppState,
};

/// GET /api/treasury/accounts - List accounts with balances
pub async fn get_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("treasury.view")])
        .await?;

    let accounts = TreasuryRepository::new(&state.db).get_accounts().await?;
    let dto: Vec<_> = accounts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/treasury/accounts/{id} - Get one account with its balance
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("treasury.view")])
        .await?;

    let Some(account) = TreasuryRepository::new(&state.db).find_account(id).await? else {
        return Err(AppError::NotFound("Treasury account not found".to_string()));
    };

    Ok((StatusCode::OK, Json(account.into_dto())))
}

#[derive(Serialize)]
struct TransactionPageDto {
    transactions: Vec<crate::dto::treasury::TreasuryTransactionDto>,
    total: u64,
}

/// GET /api/treasury/accounts/{id}/transactions - List an account's ledger
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("treasury.view")])
        .await?;

    let repo = TreasuryRepository::new(&state.db);
    if repo.find_account(id).await?.is_none() {
        return Err(AppError::NotFound("Treasury account not found".to_string()));
    }

    let (transactions, total) = repo.get_transactions(id, page.page, page.per_page).await?;

    let dto = TransactionPageDto {
        transactions: transactions.into_iter().map(|t| t.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct CreateTransactionBody {
    pub kind: String,
    pub amount: i64,
    pub memo: Option<String>,
}

/// POST /api/treasury/accounts/{id}/transactions - Post a deposit or withdrawal
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<CreateTransactionBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("treasury.manage")])
        .await?;

    let kind = TransactionKind::parse(&body.kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown transaction kind '{}'", body.kind)))?;

    let transaction = TreasuryService::new(&state.db)
        .post_transaction(CreateTransactionParam {
            account_id: id,
            kind,
            amount: body.amount,
            memo: body.memo,
            actor_user_id: actor.user.discord_id,
        })
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "treasury.transaction",
            "treasury_account",
            Some(id.to_string()),
            Some(serde_json::json!({
                "kind": kind.as_str(),
                "amount": body.amount,
            })),
        )
        .await?;

    let dto = transaction.into_dto();
    state.realtime.publish("treasury", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}
