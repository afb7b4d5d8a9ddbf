use super::*;

/// Tests listing a guild's pending restores.
///
/// Verifies that the newest record comes first and other guilds are left out.
///
/// Expected: Ok with the guild's two records, newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
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
    factory::pending_restore::PendingRestoreFactory::new(db, "1", "200")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    factory::pending_restore::PendingRestoreFactory::new(db, "1", "201")
        .original_display_name("Luigi")
        .build()
        .await?;
    factory::create_pending_restore(db, "2", "300").await?;

    let identities = PendingRestoreRepository::new(db).get_by_guild_id(1).await?;

    let users: Vec<u64> = identities.iter().map(|identity| identity.user_id).collect();
    assert_eq!(users, vec![201, 200]);
    assert_eq!(identities[0].original_display_name, "Luigi");

    Ok(())
}

/// Tests listing a guild without pending restores.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_guild_without_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let identities = PendingRestoreRepository::new(db).get_by_guild_id(1).await?;

    assert!(identities.is_empty());

    Ok(())
}
