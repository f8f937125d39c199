use super::*;

/// Tests the documented defaults when no configuration exists.
///
/// Expected: Ok with no welcome channel and ticket counter 1
#[tokio::test]
async fn uses_defaults_without_document() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();

    let store = BotConfigStore::load(test.bot_config_path()).await?;

    assert_eq!(
        store.get().await,
        BotConfig {
            welcome_channel_id: None,
            ticket_counter: 1,
        }
    );

    Ok(())
}

/// Tests loading a configuration written by a previous run.
///
/// Expected: Ok with the staged values
#[tokio::test]
async fn loads_existing_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bot_config(
            BotConfigFactory::new()
                .welcome_channel_id(42)
                .ticket_counter(9)
                .build(),
        )
        .build()
        .unwrap();

    let store = BotConfigStore::load(test.bot_config_path()).await?;

    assert_eq!(store.welcome_channel().await?, Some(42));
    assert_eq!(store.get().await.ticket_counter, 9);

    Ok(())
}

/// Tests that a corrupt configuration aborts loading.
///
/// Expected: Err(JsonErr)
#[tokio::test]
async fn fails_on_corrupt_document() {
    let test = TestBuilder::new()
        .with_raw_bot_config("not json")
        .build()
        .unwrap();

    let result = BotConfigStore::load(test.bot_config_path()).await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));
}
