use super::*;

async fn check(guilds: Vec<UserGuild>, guild_id: &str) -> Result<UserGuild, AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .login(&dashboard_user(guilds), "token".to_string())
        .await?;

    let (_, guild) = AuthGuard::new(session).require_guild(guild_id).await?;

    Ok(guild)
}

fn is_denied(result: &Result<UserGuild, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::AuthErr(AuthError::GuildAccessDenied { .. }))
    )
}

/// Tests that the guild owner may manage the guild.
///
/// Expected: Ok(UserGuild)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let guild = check(vec![user_guild("100", true, NO_PERMISSIONS)], "100").await?;

    assert_eq!(guild.id, "100");

    Ok(())
}

/// Tests that administrator and manage-server permissions are enough.
///
/// Expected: Ok(UserGuild) for both
#[tokio::test]
async fn grants_access_with_manage_permissions() -> Result<(), AppError> {
    check(vec![user_guild("100", false, ADMINISTRATOR)], "100").await?;
    check(vec![user_guild("100", false, MANAGE_GUILD)], "100").await?;

    Ok(())
}

/// Tests that plain membership is not enough.
///
/// Expected: Err(AuthError::GuildAccessDenied)
#[tokio::test]
async fn denies_access_to_regular_member() {
    let result = check(vec![user_guild("100", false, SEND_MESSAGES)], "100").await;

    assert!(is_denied(&result));
}

/// Tests that a guild missing from the OAuth list is denied.
///
/// Expected: Err(AuthError::GuildAccessDenied)
#[tokio::test]
async fn denies_access_to_unlisted_guild() {
    let result = check(vec![user_guild("100", true, ADMINISTRATOR)], "200").await;

    assert!(is_denied(&result));
}

/// Tests that the guild check still requires a login.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn denies_access_without_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require_guild("100").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}
