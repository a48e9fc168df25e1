use super::*;

use crate::middleware::{
    auth::{Access, AuthGuard},
    session::AuthSession,
};
use test_utils::factory::{
    employee::EmployeeFactory,
    role::{assign_role, create_role, grant_permission},
    user::UserFactory,
};

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession).
#[tokio::test]
async fn rejects_without_session_user() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    let result = AuthGuard::new(&state, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that any logged-in user passes an empty requirement list.
///
/// Expected: Ok with the actor's user resolved from the database.
#[tokio::test]
async fn logged_in_user_passes_empty_requirements() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    UserFactory::new(db).discord_id("42").name("Officer").build().await?;
    AuthSession::new(session).set_user_id(42).await?;

    let actor = AuthGuard::new(&state, session).require(&[]).await?;

    assert_eq!(actor.user.discord_id, 42);
    assert_eq!(actor.user.name, "Officer");

    Ok(())
}

/// Tests that the admin flag bypasses permission gates.
///
/// Expected: Ok even without any role grants.
#[tokio::test]
async fn admin_bypasses_permission_gate() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    UserFactory::new(db).discord_id("42").admin(true).build().await?;
    AuthSession::new(session).set_user_id(42).await?;

    AuthGuard::new(&state, session)
        .require(&[
            Access::Admin,
            Access::Permission("leadership.view"),
            Access::MinRank(17),
        ])
        .await?;

    Ok(())
}

/// Tests the permission-name gate.
///
/// Expected: denied without the grant, allowed once a held role grants it.
#[tokio::test]
async fn permission_gate_requires_grant() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    UserFactory::new(db).discord_id("42").build().await?;
    AuthSession::new(session).set_user_id(42).await?;

    let guard = AuthGuard::new(&state, session);
    let denied = guard
        .require(&[Access::Permission("sanctions.manage")])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(42, _)))
    ));

    let role = create_role(db).await?;
    assign_role(db, "42", role.role_id.clone()).await?;
    grant_permission(db, role.role_id, "sanctions.manage").await?;
    state.permissions.invalidate(42).await;

    guard
        .require(&[Access::Permission("sanctions.manage")])
        .await?;

    Ok(())
}

/// Tests the minimum-rank gate against the employee record.
///
/// Expected: allowed at or above the level, denied below it.
#[tokio::test]
async fn min_rank_gate_uses_active_employee_record() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    UserFactory::new(db).discord_id("42").build().await?;
    EmployeeFactory::new(db).user_id("42").rank_level(7).build().await?;
    AuthSession::new(session).set_user_id(42).await?;

    let guard = AuthGuard::new(&state, session);
    guard.require(&[Access::MinRank(7)]).await?;

    let denied = guard.require(&[Access::MinRank(8)]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(42, _)))
    ));

    Ok(())
}

/// Tests the role-name gate.
///
/// Expected: allowed only while the user holds the named role.
#[tokio::test]
async fn role_gate_checks_display_name() -> Result<(), AppError> {
    let mut test = guard_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db.clone());

    UserFactory::new(db).discord_id("42").build().await?;
    let role = create_role(db).await?.role_id;
    assign_role(db, "42", role.clone()).await?;

    // Rename the mirror so the display name is predictable.
    use sea_orm::{ActiveModelTrait, ActiveValue};
    entity::discord_role::ActiveModel {
        role_id: ActiveValue::Unchanged(role),
        name: ActiveValue::Set("Internal Affairs".to_string()),
        ..Default::default()
    }
    .update(db)
    .await
    .map_err(AppError::from)?;

    AuthSession::new(session).set_user_id(42).await?;

    let guard = AuthGuard::new(&state, session);
    guard.require(&[Access::Role("Internal Affairs")]).await?;

    let denied = guard.require(&[Access::Role("Detective Bureau")]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(42, _)))
    ));

    Ok(())
}
