//! Department reference endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::{employee::EmployeeRepository, reference::DepartmentRepository},
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    state::AppState,
};

/// GET /api/departments - List departments
pub async fn get_departments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let departments = DepartmentRepository::new(&state.db).get_all().await?;
    let dto: Vec<_> = departments.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/departments/{code}/employees - List a department's members
pub async fn get_department_employees(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("employees.view")])
        .await?;

    if !DepartmentRepository::new(&state.db).exists(&code).await? {
        return Err(AppError::NotFound("Department not found".to_string()));
    }

    let employees = EmployeeRepository::new(&state.db)
        .get_by_department(&code)
        .await?;
    let dto: Vec<_> = employees.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
