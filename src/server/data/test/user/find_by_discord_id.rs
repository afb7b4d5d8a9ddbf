use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("TestUser")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_discord_id(123456789)
        .await?
        .unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests finding a user that never logged in.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_discord_id(123456789).await?;

    assert!(user.is_none());

    Ok(())
}
