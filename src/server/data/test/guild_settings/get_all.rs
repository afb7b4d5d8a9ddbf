use super::*;

/// Tests listing every known guild.
///
/// Verifies that guilds are ordered by name and each carries its own excluded channels.
///
/// Expected: Ok with both guilds ordered by name
#[tokio::test]
async fn lists_guilds_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .name("Zucchini")
        .build()
        .await?;
    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("2")
        .name("Antipasto")
        .build()
        .await?;
    factory::create_excluded_channel(db, "1", "10").await?;

    let all = GuildSettingsRepository::new(db).get_all().await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].guild_id, 2);
    assert!(all[0].excluded_channel_ids.is_empty());
    assert_eq!(all[1].guild_id, 1);
    assert_eq!(all[1].excluded_channel_ids, BTreeSet::from([10]));

    Ok(())
}

/// Tests listing when no guild is known.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let all = GuildSettingsRepository::new(db).get_all().await?;

    assert!(all.is_empty());

    Ok(())
}
