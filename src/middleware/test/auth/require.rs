use super::*;

/// Tests that a logged-in user passes.
///
/// Expected: Ok(DashboardUser) equal to the stored user
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let user = dashboard_user(vec![user_guild("1", true, NO_PERMISSIONS)]);
    AuthSession::new(session)
        .login(&user, "token".to_string())
        .await?;

    let result = AuthGuard::new(session).require().await?;

    assert_eq!(result, user);

    Ok(())
}

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn denies_access_without_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}

/// Tests that logging out removes the user.
///
/// Expected: Err(AuthError::Unauthenticated) after logout
#[tokio::test]
async fn denies_access_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session
        .login(&dashboard_user(Vec::new()), "token".to_string())
        .await?;
    auth_session.logout().await?;

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}
