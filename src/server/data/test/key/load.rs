use super::*;

/// Tests loading when the registry file does not exist yet.
///
/// Verifies that a missing document yields an empty store instead of an error,
/// and that nothing is written until the first mutation.
///
/// Expected: Ok with zero keys and no file on disk
#[tokio::test]
async fn starts_empty_without_document() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();

    let store = KeyStore::load(test.keys_path()).await?;

    assert_eq!(store.len().await, 0);
    assert!(!test.keys_path().exists());

    Ok(())
}

/// Tests loading records written in the persisted layout.
///
/// Verifies that bound, unbound and lifetime records all survive parsing.
///
/// Expected: Ok with every staged record readable
#[tokio::test]
async fn loads_existing_records() -> Result<(), AppError> {
    let expiry = Utc.timestamp_millis_opt(1_900_000_000_000).unwrap();
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("A").expires_at(expiry).build())
        .with_key(KeyFactory::new().key("B").hwid("hw1").lifetime().build())
        .build()
        .unwrap();

    let store = KeyStore::load(test.keys_path()).await?;

    assert_eq!(store.len().await, 2);
    assert_eq!(
        store.get("A").await,
        Some(KeyRecord {
            hwid: None,
            expiry: Expiry::At(expiry),
        })
    );
    assert_eq!(
        store.get("B").await,
        Some(KeyRecord {
            hwid: Some("hw1".to_string()),
            expiry: Expiry::Lifetime,
        })
    );

    Ok(())
}

/// Tests that a corrupt document is reported rather than replaced.
///
/// Expected: Err(JsonErr)
#[tokio::test]
async fn fails_on_corrupt_document() {
    let test = TestBuilder::new()
        .with_raw_keys("{ \"truncated\": ")
        .build()
        .unwrap();

    let result = KeyStore::load(test.keys_path()).await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));
}

/// Tests that a restarted store sees exactly what the previous one saved.
///
/// Expected: Ok with binding state unchanged after reload
#[tokio::test]
async fn survives_restart() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let record = KeyRecord {
        hwid: Some("hw1".to_string()),
        expiry: Expiry::At(Utc.timestamp_millis_opt(1_900_000_000_000).unwrap()),
    };

    let store = KeyStore::load(test.keys_path()).await?;
    store.set("K", record.clone()).await?;
    drop(store);

    let reloaded = KeyStore::load(test.keys_path()).await?;

    assert_eq!(reloaded.get("K").await, Some(record));

    Ok(())
}

/// Tests that an explicit save rewrites the document from memory.
///
/// Expected: a document deleted behind the store's back is written again in full
#[tokio::test]
async fn save_rewrites_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").lifetime().build())
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    std::fs::remove_file(test.keys_path()).unwrap();
    store.save().await?;

    let document = test.read_json(test.keys_path()).unwrap();
    assert_eq!(document["K"]["expiry"], "lifetime");
    assert!(document["K"]["hwid"].is_null());

    Ok(())
}
