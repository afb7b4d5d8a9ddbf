use super::*;

/// Tests that a rename touches only the name column.
///
/// Verifies that flags, the rename counter and excluded channel rows written before
/// the rename are still present afterwards.
///
/// Expected: Ok(true) with the new name and everything else unchanged
#[tokio::test]
async fn updates_name_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123")
        .name("Pizza Party")
        .immunity_role_id(Some("55"))
        .rename_count(3)
        .build()
        .await?;
    factory::create_excluded_channel(db, "123", "10").await?;

    let repo = GuildSettingsRepository::new(db);
    assert!(repo.update_name(123, "Taco Tuesday").await?);

    let stored = repo.find_by_guild_id(123).await?.unwrap();
    assert_eq!(stored.name, "Taco Tuesday");
    assert_eq!(stored.immunity_role_id, Some(55));
    assert_eq!(stored.rename_count, 3);
    assert_eq!(stored.excluded_channel_ids, BTreeSet::from([10]));

    Ok(())
}

/// Tests renaming a guild without settings.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);

    assert!(!repo.update_name(123, "Taco Tuesday").await?);
    assert!(repo.find_by_guild_id(123).await?.is_none());

    Ok(())
}
