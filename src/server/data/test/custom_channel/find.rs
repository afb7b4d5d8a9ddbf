use super::*;

/// Tests reading a channel's stored rules.
///
/// Expected: Ok(Some) with the rules decoded in order
#[tokio::test]
async fn finds_channel_with_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::create_custom_channel(
        db,
        "1",
        "10",
        r#"[{"type":"reverse"},{"type":"suffix","value":"(AFK)"}]"#,
    )
    .await?;

    let channel = CustomChannelRepository::new(db).find(1, 10).await?.unwrap();

    assert_eq!(channel.name, "Channel 10");
    assert_eq!(
        channel.rules,
        vec![
            ChannelRule::Reverse,
            ChannelRule::Suffix {
                value: "(AFK)".to_string()
            }
        ]
    );

    Ok(())
}

/// Tests reading a channel without rules.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_plain_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = CustomChannelRepository::new(db).find(1, 10).await?;

    assert!(channel.is_none());

    Ok(())
}

/// Tests reading rules that are not valid JSON.
///
/// Expected: Err(InternalError::ParseRules)
#[tokio::test]
async fn fails_on_corrupt_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::create_custom_channel(db, "1", "10", "not json").await?;

    let result = CustomChannelRepository::new(db).find(1, 10).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::ParseRules { .. }))
    ));

    Ok(())
}
