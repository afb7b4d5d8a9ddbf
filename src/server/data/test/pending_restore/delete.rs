use super::*;

/// Tests deleting a single member's record.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_record_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::create_pending_restore(db, "1", "200").await?;

    let repo = PendingRestoreRepository::new(db);

    assert!(repo.delete(1, 200).await?);
    assert!(!repo.delete(1, 200).await?);

    Ok(())
}

/// Tests deleting all records of a guild.
///
/// Expected: Ok(2) with the other guild's record kept
#[tokio::test]
async fn deletes_by_guild_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("2")
        .build()
        .await?;
    factory::create_pending_restore(db, "1", "200").await?;
    factory::create_pending_restore(db, "1", "201").await?;
    factory::create_pending_restore(db, "2", "200").await?;

    let repo = PendingRestoreRepository::new(db);
    let deleted = repo.delete_by_guild_id(1).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find(2, 200).await?.is_some());

    Ok(())
}
