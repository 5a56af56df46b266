//! Tests for MessService::cancel_subscription.
//!
//! Covers the transactional delete+update pair, the non-idempotence contract,
//! and the concurrent cancellation property (exactly one winner).

use campus::{
    error::{mess::MessError, Error},
    service::mess::MessService,
};
use campus_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests a successful cancellation.
///
/// Expected: the bill for the pair is deleted and mess_id becomes NULL.
#[tokio::test]
async fn deletes_bill_and_clears_subscription() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .cancel_subscription(profile_model.user_id, mess_model.id)
        .await;

    assert!(result.is_ok());

    let bill_count = entity::prelude::Bill::find().count(&test.state.db).await?;
    assert_eq!(bill_count, 0);

    let profile = entity::prelude::UserProfile::find_by_id(profile_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(profile.mess_id, None);

    Ok(())
}

/// Tests that cancelling twice errors on the second call.
///
/// Expected: first Ok, second Err; the guard sees the cleared subscription.
#[tokio::test]
async fn second_cancellation_errors() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;

    let mess_service = MessService::new(&test.state.db);

    let first = mess_service
        .cancel_subscription(profile_model.user_id, mess_model.id)
        .await;
    assert!(first.is_ok());

    let second = mess_service
        .cancel_subscription(profile_model.user_id, mess_model.id)
        .await;
    assert!(matches!(
        second,
        Err(Error::MessError(MessError::NotSubscribed))
    ));

    Ok(())
}

/// Tests cancellation when the pair has no bill row.
///
/// Expected: Err(MessError::BillNotFound) and the transaction rolls back
/// before the profile is touched.
#[tokio::test]
async fn aborts_without_mutation_when_bill_missing() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;
    let profile_model = test
        .mess()
        .insert_profile(1, "Student", Some(mess_model.id))
        .await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .cancel_subscription(profile_model.user_id, mess_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MessError(MessError::BillNotFound { .. }))
    ));

    let profile = entity::prelude::UserProfile::find_by_id(profile_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(profile.mess_id, Some(mess_model.id));

    Ok(())
}

/// Tests the guard on cancellation for a profile subscribed elsewhere.
///
/// Expected: Err(MessError::NotSubscribed) and no state change.
#[tokio::test]
async fn rejects_other_mess_without_mutation() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, bill_model) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;
    let other_mess = test.mess().insert_mess("North", "Daily menu").await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .cancel_subscription(profile_model.user_id, other_mess.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MessError(MessError::NotSubscribed))
    ));

    let bill_exists = entity::prelude::Bill::find_by_id(bill_model.id)
        .one(&test.state.db)
        .await?;
    assert!(bill_exists.is_some());

    let profile = entity::prelude::UserProfile::find_by_id(profile_model.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(profile.mess_id, Some(mess_model.id));

    Ok(())
}

/// Tests two concurrent cancellations for the same pair.
///
/// Expected: exactly one succeeds; the loser observes NotSubscribed or
/// BillNotFound; exactly one bill deletion occurs.
#[tokio::test]
async fn concurrent_cancellations_have_one_winner() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;

    let service_a = MessService::new(&test.state.db);
    let service_b = MessService::new(&test.state.db);

    let (first, second) = futures::join!(
        service_a.cancel_subscription(profile_model.user_id, mess_model.id),
        service_b.cancel_subscription(profile_model.user_id, mess_model.id),
    );

    let successes = [&first, &second]
        .iter()
        .filter(|result| result.is_ok())
        .count();
    assert_eq!(successes, 1);

    let loser = if first.is_ok() { second } else { first };
    assert!(matches!(
        loser,
        Err(Error::MessError(
            MessError::NotSubscribed | MessError::BillNotFound { .. }
        ))
    ));

    let bill_count = entity::prelude::Bill::find().count(&test.state.db).await?;
    assert_eq!(bill_count, 0);

    Ok(())
}
