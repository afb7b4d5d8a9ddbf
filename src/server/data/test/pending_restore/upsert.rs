use super::*;

/// Tests storing and reading a pending restore.
///
/// Expected: Ok with the original nickname read back
#[tokio::test]
async fn stores_pending_restore() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;

    let repo = PendingRestoreRepository::new(db);
    repo.upsert(&ActiveIdentity::new(
        1,
        200,
        Some("Marco".to_string()),
        "Marco".to_string(),
        "Gino Panino".to_string(),
    ))
    .await?;

    let stored = repo.find(1, 200).await?.unwrap();
    assert_eq!(stored.original_nickname, Some("Marco".to_string()));
    assert_eq!(stored.assigned_nickname, "Gino Panino");
    assert!(repo.find(1, 201).await?.is_none());

    Ok(())
}

/// Tests storing a second record for the same member.
///
/// Expected: Ok with the first record overwritten
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
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
    repo.upsert(&ActiveIdentity::new(1, 200, None, "Luigi".to_string(), "Kevin".to_string()))
        .await?;

    let stored = repo.find(1, 200).await?.unwrap();
    assert_eq!(stored.original_nickname, None);
    assert_eq!(stored.assigned_nickname, "Kevin");

    Ok(())
}
