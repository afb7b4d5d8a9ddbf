use super::*;

/// Tests incrementing the counter of a known guild.
///
/// Expected: Ok(true) and rename_count raised by one per call
#[tokio::test]
async fn increments_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123")
        .rename_count(4)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    assert!(repo.increment_rename_count(123).await?);
    assert!(repo.increment_rename_count(123).await?);

    let stored = repo.find_by_guild_id(123).await?.unwrap();
    assert_eq!(stored.rename_count, 6);

    Ok(())
}

/// Tests incrementing the counter of an unknown guild.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let updated = repo.increment_rename_count(123).await?;

    assert!(!updated);
    assert!(repo.find_by_guild_id(123).await?.is_none());

    Ok(())
}
