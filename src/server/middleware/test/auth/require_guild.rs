use super::*;

/// Tests access to a guild listed in the session.
///
/// Expected: Ok with the logged-in user
#[tokio::test]
async fn allows_managed_guild() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1001")
        .build()
        .await
        .unwrap();
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(1001).await.unwrap();
    auth_session.set_guild_ids(&[10, 20]).await.unwrap();

    let result = AuthGuard::new(db, session).require_guild(20).await;

    assert!(result.is_ok());
}

/// Tests access to a guild the user does not manage.
///
/// Expected: Err(AuthError::GuildAccessDenied)
#[tokio::test]
async fn denies_unmanaged_guild() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1001")
        .build()
        .await
        .unwrap();
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(1001).await.unwrap();
    auth_session.set_guild_ids(&[10]).await.unwrap();

    let result = AuthGuard::new(db, session).require_guild(30).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::GuildAccessDenied {
            user_id: 1001,
            guild_id: 30
        }))
    ));
}

/// Tests that authentication is checked before guild access.
///
/// Expected: Err(AuthError::UserNotInSession) even for a listed guild
#[tokio::test]
async fn requires_login_before_guild_check() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_guild_ids(&[10]).await.unwrap();

    let result = AuthGuard::new(db, session).require_guild(10).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}
