use super::*;

/// Tests deleting a custom channel.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_channel_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::create_custom_channel(db, "1", "10", "[]").await?;

    let repo = CustomChannelRepository::new(db);

    assert!(repo.delete(1, 10).await?);
    assert!(!repo.delete(1, 10).await?);

    Ok(())
}

/// Tests that deleting one guild's channel leaves the same channel ID of another guild.
///
/// Expected: Ok(true) with the other guild's row kept
#[tokio::test]
async fn keeps_other_guild_channel() -> Result<(), AppError> {
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
    factory::create_custom_channel(db, "1", "10", "[]").await?;
    factory::create_custom_channel(db, "2", "10", "[]").await?;

    let repo = CustomChannelRepository::new(db);

    assert!(repo.delete(1, 10).await?);
    assert!(repo.find(2, 10).await?.is_some());

    Ok(())
}
