use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests logging in again with a changed name.
///
/// Verifies that the name and last login time are updated in place.
///
/// Expected: Ok with name updated and last_login_at advanced
#[tokio::test]
async fn updates_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("OriginalName")
        .last_login_at(chrono::Utc::now() - chrono::Duration::days(1))
        .build()
        .await?;

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "UpdatedName".to_string(),
        })
        .await?;

    assert_eq!(user.name, "UpdatedName");
    assert!(user.last_login_at > existing.last_login_at);

    Ok(())
}
