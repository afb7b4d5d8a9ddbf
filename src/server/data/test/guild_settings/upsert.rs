use super::*;

/// Tests creating settings for a new guild.
///
/// Expected: Ok with row and excluded channels inserted
#[tokio::test]
async fn creates_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut settings = ServerSettings::new(123);
    settings.name = "Pizza Party".to_string();
    settings.excluded_channel_ids.insert(10);

    let repo = GuildSettingsRepository::new(db);
    repo.upsert(&settings).await?;

    assert_eq!(repo.find_by_guild_id(123).await?, Some(settings));

    Ok(())
}

/// Tests updating existing settings.
///
/// Verifies that editable fields are replaced while the rename counter written by
/// increments is preserved.
///
/// Expected: Ok with new values and rename_count unchanged
#[tokio::test]
async fn updates_settings_and_keeps_rename_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123")
        .rename_count(7)
        .build()
        .await?;

    let mut settings = ServerSettings::new(123);
    settings.name = "Renamed".to_string();
    settings.enabled = false;
    settings.restore_on_leave = true;
    settings.immunity_role_id = Some(55);

    let repo = GuildSettingsRepository::new(db);
    repo.upsert(&settings).await?;

    let stored = repo.find_by_guild_id(123).await?.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert!(!stored.enabled);
    assert!(stored.restore_on_leave);
    assert_eq!(stored.immunity_role_id, Some(55));
    assert_eq!(stored.rename_count, 7);

    Ok(())
}

/// Tests that excluded channels are replaced rather than merged.
///
/// Expected: Ok with only the channels of the latest upsert stored
#[tokio::test]
async fn replaces_excluded_channels() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_settings(db).await?;
    let mut settings = ServerSettings::new(123);
    settings.excluded_channel_ids.extend([10, 11]);

    let repo = GuildSettingsRepository::new(db);
    repo.upsert(&settings).await?;
    settings.excluded_channel_ids = BTreeSet::from([12]);
    repo.upsert(&settings).await?;

    let stored = repo.find_by_guild_id(123).await?.unwrap();
    assert_eq!(stored.excluded_channel_ids, BTreeSet::from([12]));
    let total = entity::prelude::ExcludedChannel::find().count(db).await?;
    assert_eq!(total, 1);

    Ok(())
}
