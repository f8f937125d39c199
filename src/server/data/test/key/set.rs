use super::*;

/// Tests that inserting a record writes the persisted layout.
///
/// Expected: Ok with `{hwid: null, expiry: "lifetime"}` on disk
#[tokio::test]
async fn persists_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    store
        .set("Firebase-lifetime-0A1B2C3D", KeyRecord::unbound(Expiry::Lifetime))
        .await?;

    let document = test.read_json(test.keys_path()).unwrap();
    assert_eq!(
        document,
        serde_json::json!({
            "Firebase-lifetime-0A1B2C3D": { "hwid": null, "expiry": "lifetime" }
        })
    );

    Ok(())
}

/// Tests that setting an existing key replaces its record.
///
/// Expected: Ok with the second record stored
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").hwid("old").build())
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    store.set("K", KeyRecord::unbound(Expiry::Lifetime)).await?;

    assert_eq!(
        store.get("K").await,
        Some(KeyRecord::unbound(Expiry::Lifetime))
    );

    Ok(())
}

/// Tests that a failed save leaves memory unchanged.
///
/// Points the store at a directory that is removed before the write so the save
/// fails, then checks that the record was rolled back.
///
/// Expected: Err(IoErr) with no record in memory
#[tokio::test]
async fn rolls_back_on_failed_save() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let nested = test.dir.path().join("gone");
    std::fs::create_dir(&nested)?;
    let store = KeyStore::load(nested.join("keys.json")).await?;
    std::fs::remove_dir(&nested)?;

    let result = store.set("K", KeyRecord::unbound(Expiry::Lifetime)).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert_eq!(store.get("K").await, None);

    Ok(())
}
