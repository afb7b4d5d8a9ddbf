use super::*;

/// Tests rejection of an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_user_in_session() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests rejection of a session pointing at a user missing from the database.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the session's user ID
#[tokio::test]
async fn fails_when_user_missing_from_database() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));
}

/// Tests resolving the logged-in user.
///
/// Expected: Ok with the user stored in the database
#[tokio::test]
async fn returns_logged_in_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("1001")
        .name("Marco")
        .build()
        .await
        .unwrap();
    AuthSession::new(session).set_user_id(1001).await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await.unwrap();

    assert_eq!(result.discord_id, 1001);
    assert_eq!(result.name, user.name);
}
