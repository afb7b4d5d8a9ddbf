use super::*;

fn channel(rules: Vec<ChannelRule>) -> CustomChannel {
    CustomChannel {
        guild_id: 1,
        channel_id: 10,
        name: "Backwards Bar".to_string(),
        rules,
    }
}

/// Tests inserting a new custom channel.
///
/// Expected: Ok and the channel read back unchanged
#[tokio::test]
async fn inserts_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;

    let repo = CustomChannelRepository::new(db);
    let created = channel(vec![ChannelRule::UpsideDown]);
    repo.upsert(&created).await?;

    assert_eq!(repo.find(1, 10).await?, Some(created));

    Ok(())
}

/// Tests replacing the rules of an existing channel.
///
/// Expected: Ok with one row holding the new rules
#[tokio::test]
async fn replaces_rules_of_existing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;

    let repo = CustomChannelRepository::new(db);
    repo.upsert(&channel(vec![ChannelRule::UpsideDown])).await?;
    repo.upsert(&channel(vec![ChannelRule::Leetspeak, ChannelRule::Uppercase]))
        .await?;

    let channels = repo.get_by_guild_id(1).await?;
    assert_eq!(channels.len(), 1);
    assert_eq!(
        channels[0].rules,
        vec![ChannelRule::Leetspeak, ChannelRule::Uppercase]
    );

    Ok(())
}

/// Tests inserting a channel for a guild without settings.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_without_guild_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomChannelRepository::new(db)
        .upsert(&channel(vec![ChannelRule::Reverse]))
        .await;

    assert!(result.is_err());

    Ok(())
}
