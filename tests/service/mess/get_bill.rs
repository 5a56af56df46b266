//! Tests for MessService::get_bill.

use campus::{
    error::{mess::MessError, Error},
    model::mess::BillDto,
    service::mess::MessService,
};
use campus_test_utils::prelude::*;

/// Tests the flattened billing record for the spec's end-to-end scenario.
///
/// Expected: name from the profile, mess name "Central", and the bill amounts.
#[tokio::test]
async fn returns_flattened_record() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .get_bill(profile_model.user_id, mess_model.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap(),
        BillDto {
            name: "Test Student".to_string(),
            mess: "Central".to_string(),
            monthly_bill: 3000,
            extra_charges: 150,
        }
    );

    Ok(())
}

/// Tests the ownership guard error variant.
///
/// Expected: Err(MessError::NotSubscribed) for a mess the caller is not
/// subscribed to.
#[tokio::test]
async fn fails_with_not_subscribed_for_other_mess() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (_, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;
    let other_mess = test.mess().insert_mess("North", "Daily menu").await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .get_bill(profile_model.user_id, other_mess.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MessError(MessError::NotSubscribed))
    ));

    Ok(())
}

/// Tests the explicit no-bill error variant.
///
/// Expected: Err(MessError::BillNotFound) for a subscribed pair without a
/// bill row.
#[tokio::test]
async fn fails_with_bill_not_found_when_no_bill_exists() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;
    let profile_model = test
        .mess()
        .insert_profile(1, "Student", Some(mess_model.id))
        .await?;

    let mess_service = MessService::new(&test.state.db);
    let result = mess_service
        .get_bill(profile_model.user_id, mess_model.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MessError(MessError::BillNotFound { .. }))
    ));

    Ok(())
}

/// Tests the missing profile error variant.
///
/// Expected: Err(MessError::ProfileNotFound) for an identity without a
/// stored profile.
#[tokio::test]
async fn fails_with_profile_not_found_for_unknown_identity() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;

    let unknown_user_id = 42;
    let mess_service = MessService::new(&test.state.db);
    let result = mess_service.get_bill(unknown_user_id, mess_model.id).await;

    assert!(matches!(
        result,
        Err(Error::MessError(MessError::ProfileNotFound(_)))
    ));

    Ok(())
}
