use super::*;

/// Tests designating a welcome channel.
///
/// Expected: Ok with the id stored as a string on disk
#[tokio::test]
async fn sets_welcome_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = BotConfigStore::load(test.bot_config_path()).await?;

    store.set_welcome_channel(Some(1234)).await?;

    assert_eq!(store.welcome_channel().await?, Some(1234));
    let document = test.read_json(test.bot_config_path()).unwrap();
    assert_eq!(
        document,
        serde_json::json!({ "welcomeChannelId": "1234", "ticketCounter": 1 })
    );

    Ok(())
}

/// Tests clearing the welcome channel.
///
/// Expected: Ok with null persisted
#[tokio::test]
async fn clears_welcome_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bot_config(BotConfigFactory::new().welcome_channel_id(77).build())
        .build()
        .unwrap();
    let store = BotConfigStore::load(test.bot_config_path()).await?;

    store.set_welcome_channel(None).await?;

    assert_eq!(store.welcome_channel().await?, None);
    let document = test.read_json(test.bot_config_path()).unwrap();
    assert!(document["welcomeChannelId"].is_null());

    Ok(())
}

/// Tests that a hand-edited, non-numeric channel id is reported.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_invalid_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_bot_config(r#"{"welcomeChannelId":"general","ticketCounter":1}"#)
        .build()
        .unwrap();
    let store = BotConfigStore::load(test.bot_config_path()).await?;

    let result = store.welcome_channel().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
