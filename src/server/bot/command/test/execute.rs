use super::*;

/// Tests that every command refuses non-operators before touching the store.
///
/// Expected: Forbidden, and the key is still present afterwards
#[tokio::test]
async fn refuses_non_operators() -> Result<(), AppError> {
    let (key, record) = KeyFactory::new().key("K").build();
    let test = TestBuilder::new().with_key((key, record)).build().unwrap();
    let state = bot_state(&test).await;

    for command in [
        KeyCommand::Generate {
            duration: "day".to_string(),
        },
        KeyCommand::Check {
            key: "K".to_string(),
        },
        KeyCommand::Revoke {
            key: "K".to_string(),
        },
    ] {
        assert_license_err(
            command.execute(&state, STRANGER, now()).await,
            LicenseError::Forbidden,
        );
    }

    assert_eq!(state.keys.len().await, 1);
    assert!(state.keys.get("K").await.is_some());

    Ok(())
}

/// Tests the generate, check and revoke replies for an operator.
///
/// Expected: replies quote the key, check shows "Not bound", revoke removes it
#[tokio::test]
async fn operator_round_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let state = bot_state(&test).await;

    let reply = KeyCommand::Generate {
        duration: "lifetime".to_string(),
    }
    .execute(&state, OPERATOR, now())
    .await?;
    let key = reply
        .strip_prefix("✅ Key generated: `")
        .and_then(|rest| rest.strip_suffix('`'))
        .unwrap()
        .to_string();
    assert!(key.starts_with("Firebase-lifetime-"));

    let check = KeyCommand::Check { key: key.clone() }
        .execute(&state, OPERATOR, now())
        .await?;
    assert_eq!(
        check,
        format!("🔑 Key: `{}`\nStatus: Not bound\nExpires: Never", key)
    );

    let revoke = KeyCommand::Revoke { key: key.clone() }
        .execute(&state, OPERATOR, now())
        .await?;
    assert_eq!(revoke, format!("❌ Key revoked: `{}`", key));
    assert!(state.keys.get(&key).await.is_none());

    Ok(())
}

/// Tests the check reply for a bound key with a fixed expiry.
///
/// Expected: hwid is shown and expiry is formatted as UTC
#[tokio::test]
async fn check_shows_binding_and_expiry() -> Result<(), AppError> {
    let (key, record) = KeyFactory::new()
        .key("K")
        .hwid("hw1")
        .expires_at(now())
        .build();
    let test = TestBuilder::new().with_key((key, record)).build().unwrap();
    let state = bot_state(&test).await;

    let reply = KeyCommand::Check {
        key: "K".to_string(),
    }
    .execute(&state, OPERATOR, now())
    .await?;

    assert_eq!(
        reply,
        "🔑 Key: `K`\nStatus: HWID Locked: `hw1`\nExpires: 2025-01-01 12:00:00 UTC"
    );

    Ok(())
}

/// Tests the error cases an operator can hit.
///
/// Expected: InvalidArgument for a bad class, NotFound for unknown keys
#[tokio::test]
async fn reports_operator_errors() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let state = bot_state(&test).await;

    let result = KeyCommand::Generate {
        duration: "bogus".to_string(),
    }
    .execute(&state, OPERATOR, now())
    .await;
    match result {
        Err(AppError::LicenseErr(LicenseError::InvalidArgument(_))) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert_eq!(state.keys.len().await, 0);

    assert_license_err(
        KeyCommand::Check {
            key: "missing".to_string(),
        }
        .execute(&state, OPERATOR, now())
        .await,
        LicenseError::NotFound,
    );
    assert_license_err(
        KeyCommand::Revoke {
            key: "missing".to_string(),
        }
        .execute(&state, OPERATOR, now())
        .await,
        LicenseError::NotFound,
    );

    Ok(())
}
