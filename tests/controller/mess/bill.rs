//! Tests for the get_bill endpoint.
//!
//! Verifies the ownership guard, the flattened billing response, and the
//! explicit not-found handling for missing profiles and bills.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use campus::{
    controller::{mess::get_bill, util::identity::RequestIdentity},
    model::mess::BillDto,
};
use campus_test_utils::prelude::*;

/// Tests the end-to-end billing read for a subscribed profile.
///
/// Expected: 200 OK with the flattened record {name, mess, monthly_bill,
/// extra_charges}.
#[tokio::test]
async fn success_returns_flattened_bill() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (mess_model, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;

    let result = get_bill(
        State(test.app_state()),
        Path(mess_model.id),
        RequestIdentity {
            user_id: profile_model.user_id,
        },
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let bill: BillDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        bill,
        BillDto {
            name: profile_model.name,
            mess: mess_model.name,
            monthly_bill: 3000,
            extra_charges: 150,
        }
    );

    Ok(())
}

/// Tests the ownership guard for a profile subscribed to a different mess.
///
/// Expected: 400 Bad Request, no billing data returned.
#[tokio::test]
async fn rejects_profile_subscribed_elsewhere() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let (_, profile_model, _) = test
        .mess()
        .insert_subscribed_profile_with_bill(1, 3000, 150)
        .await?;
    let other_mess = test.mess().insert_mess("North", "Daily menu").await?;

    let result = get_bill(
        State(test.app_state()),
        Path(other_mess.id),
        RequestIdentity {
            user_id: profile_model.user_id,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests the ownership guard for an unsubscribed profile.
///
/// Expected: 400 Bad Request.
#[tokio::test]
async fn rejects_unsubscribed_profile() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;
    let profile_model = test.mess().insert_profile(1, "Student", None).await?;

    let result = get_bill(
        State(test.app_state()),
        Path(mess_model.id),
        RequestIdentity {
            user_id: profile_model.user_id,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests the explicit no-bill path for a subscribed pair without a bill row.
///
/// Expected: 404 Not Found, never an unhandled fault.
#[tokio::test]
async fn returns_not_found_when_bill_missing() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;
    let profile_model = test
        .mess()
        .insert_profile(1, "Student", Some(mess_model.id))
        .await?;

    let result = get_bill(
        State(test.app_state()),
        Path(mess_model.id),
        RequestIdentity {
            user_id: profile_model.user_id,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the response for an identity with no stored profile.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn returns_not_found_for_unknown_identity() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test.mess().insert_mess("Central", "Daily menu").await?;

    let unknown_user_id = 42;
    let result = get_bill(
        State(test.app_state()),
        Path(mess_model.id),
        RequestIdentity {
            user_id: unknown_user_id,
        },
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
