use super::*;
use crate::server::error::license::LicenseError;

/// Tests that a mutation inside `update` is persisted.
///
/// Expected: Ok with the new hwid on disk
#[tokio::test]
async fn persists_mutation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").lifetime().build())
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    store
        .update("K", |record| {
            if let Some(record) = record {
                record.hwid = Some("hw1".to_string());
            }
            Ok(())
        })
        .await?;

    let document = test.read_json(test.keys_path()).unwrap();
    assert_eq!(document["K"]["hwid"], "hw1");

    Ok(())
}

/// Tests that a read-only `update` does not rewrite the document.
///
/// Removes the staged file first; if `update` saved, it would reappear.
///
/// Expected: Ok with no file written
#[tokio::test]
async fn skips_save_without_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").build())
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;
    std::fs::remove_file(test.keys_path())?;

    let bound = store
        .update("K", |record| Ok(record.map(|r| r.is_bound())))
        .await?;

    assert_eq!(bound, Some(false));
    assert!(!test.keys_path().exists());

    Ok(())
}

/// Tests that an error from the closure discards its partial mutation.
///
/// Expected: Err with the record unchanged in memory
#[tokio::test]
async fn discards_mutation_on_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").build())
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    let result: Result<(), AppError> = store
        .update("K", |record| {
            if let Some(record) = record {
                record.hwid = Some("hw1".to_string());
            }
            Err(LicenseError::Expired.into())
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LicenseErr(LicenseError::Expired))
    ));
    assert_eq!(store.get("K").await.and_then(|r| r.hwid), None);

    Ok(())
}
