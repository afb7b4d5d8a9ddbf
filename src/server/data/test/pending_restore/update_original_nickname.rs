use super::*;

/// Tests changing the nickname a restore will set back.
///
/// Verifies that the assigned nickname and creation time are untouched.
///
/// Expected: Ok(true) with only the original nickname changed
#[tokio::test]
async fn updates_original_nickname_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    let created = factory::pending_restore::PendingRestoreFactory::new(db, "1", "200")
        .original_nickname(Some("Marco"))
        .build()
        .await?;

    let repo = PendingRestoreRepository::new(db);
    assert!(repo.update_original_nickname(1, 200, Some("Mario")).await?);

    let stored = repo.find(1, 200).await?.unwrap();
    assert_eq!(stored.original_nickname.as_deref(), Some("Mario"));
    assert_eq!(stored.assigned_nickname, created.assigned_nickname);
    assert_eq!(stored.created_at, created.created_at);

    Ok(())
}

/// Tests clearing the nickname a restore will set back.
///
/// Expected: Ok(true) and `None` stored
#[tokio::test]
async fn clears_original_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::pending_restore::PendingRestoreFactory::new(db, "1", "200")
        .original_nickname(Some("Marco"))
        .build()
        .await?;

    let repo = PendingRestoreRepository::new(db);
    assert!(repo.update_original_nickname(1, 200, None).await?);

    assert_eq!(repo.find(1, 200).await?.unwrap().original_nickname, None);

    Ok(())
}

/// Tests updating a member without a pending restore.
///
/// Expected: Ok(false) and no record created
#[tokio::test]
async fn returns_false_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;

    let repo = PendingRestoreRepository::new(db);

    assert!(!repo.update_original_nickname(1, 200, Some("Mario")).await?);
    assert!(repo.find(1, 200).await?.is_none());

    Ok(())
}
