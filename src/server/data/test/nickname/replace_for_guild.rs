use super::*;

/// Tests replacing a guild's pool.
///
/// Expected: Ok with only the new entries stored, other guilds untouched
#[tokio::test]
async fn replaces_entries() -> Result<(), AppError> {
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
    factory::create_nicknames(db, "1", &["Greg", "Brenda"]).await?;
    factory::create_nicknames(db, "2", &["Nigel"]).await?;

    let repo = NicknameRepository::new(db);
    repo.replace_for_guild(1, &["Kevin".to_string(), "Greg".to_string()])
        .await?;

    assert_eq!(repo.get_by_guild_id(1).await?, vec!["Kevin", "Greg"]);
    assert_eq!(repo.get_by_guild_id(2).await?, vec!["Nigel"]);

    Ok(())
}

/// Tests replacing a pool with no entries.
///
/// Expected: Ok with the pool emptied
#[tokio::test]
async fn empties_pool() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::create_nicknames(db, "1", &["Greg"]).await?;

    let repo = NicknameRepository::new(db);
    repo.replace_for_guild(1, &[]).await?;

    assert!(repo.get_by_guild_id(1).await?.is_empty());

    Ok(())
}

/// Tests replacing the pool of a guild without a settings row.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_without_guild_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NicknameRepository::new(db)
        .replace_for_guild(1, &["Greg".to_string()])
        .await;

    assert!(result.is_err());

    Ok(())
}
