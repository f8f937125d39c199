use super::*;

/// Tests that ticket numbers are handed out sequentially.
///
/// Expected: Ok with 1, 2, 3 and counter 4 on disk
#[tokio::test]
async fn claims_sequential_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = BotConfigStore::load(test.bot_config_path()).await?;

    assert_eq!(store.claim_ticket_number().await?, 1);
    assert_eq!(store.claim_ticket_number().await?, 2);
    assert_eq!(store.claim_ticket_number().await?, 3);

    let document = test.read_json(test.bot_config_path()).unwrap();
    assert_eq!(document["ticketCounter"], 4);

    Ok(())
}

/// Tests that the counter continues after a restart.
///
/// Expected: Ok with numbering resumed from the persisted counter
#[tokio::test]
async fn continues_after_restart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bot_config(BotConfigFactory::new().ticket_counter(41).build())
        .build()
        .unwrap();

    let store = BotConfigStore::load(test.bot_config_path()).await?;
    assert_eq!(store.claim_ticket_number().await?, 41);
    drop(store);

    let reloaded = BotConfigStore::load(test.bot_config_path()).await?;
    assert_eq!(reloaded.claim_ticket_number().await?, 42);

    Ok(())
}
