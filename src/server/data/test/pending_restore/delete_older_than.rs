use super::*;

/// Tests pruning stale records.
///
/// Verifies that records created before the cutoff are removed while recent ones
/// are kept.
///
/// Expected: Ok(1) with only the recent record left
#[tokio::test]
async fn deletes_records_before_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("1")
        .build()
        .await?;
    factory::pending_restore::PendingRestoreFactory::new(db, "1", "200")
        .created_at(Utc::now() - Duration::days(40))
        .build()
        .await?;
    factory::create_pending_restore(db, "1", "201").await?;

    let repo = PendingRestoreRepository::new(db);
    let deleted = repo
        .delete_older_than(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo.find(1, 200).await?.is_none());
    assert!(repo.find(1, 201).await?.is_some());

    Ok(())
}
