use super::*;

/// Tests deleting a record.
///
/// Expected: Ok(Some) with the record gone from memory and disk
#[tokio::test]
async fn deletes_record() -> Result<(), AppError> {
    let (other, other_record) = create_key();
    let test = TestBuilder::new()
        .with_key(KeyFactory::new().key("K").build())
        .with_key((other.clone(), other_record))
        .build()
        .unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    let removed = store.delete("K").await?;

    assert!(removed.is_some());
    assert_eq!(store.get("K").await, None);

    let document = test.read_json(test.keys_path()).unwrap();
    assert!(document.get("K").is_none());
    assert!(document.get(&other).is_some());

    Ok(())
}

/// Tests deleting a key that does not exist.
///
/// Expected: Ok(None) without creating the document
#[tokio::test]
async fn ignores_missing_key() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = KeyStore::load(test.keys_path()).await?;

    let removed = store.delete("missing").await?;

    assert!(removed.is_none());
    assert!(!test.keys_path().exists());

    Ok(())
}
