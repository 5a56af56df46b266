//! Tests for the hostel and mess read endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use campus::{
    controller::mess::{get_mess, list_hostels, list_messes},
    model::mess::{HostelDto, MessDto},
};
use campus_test_utils::prelude::*;

/// Tests the hostel listing.
///
/// Expected: 200 OK with every inserted hostel.
#[tokio::test]
async fn lists_hostels() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    test.mess().insert_hostel("Aquamarine").await?;
    test.mess().insert_hostel("Beryl").await?;

    let result = list_hostels(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let hostels: Vec<HostelDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(hostels.len(), 2);

    Ok(())
}

/// Tests the mess listing.
///
/// Expected: 200 OK with every inserted mess.
#[tokio::test]
async fn lists_messes() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    test.mess().insert_mess("Central", "Daily menu").await?;
    test.mess().insert_mess("North", "Daily menu").await?;

    let result = list_messes(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let messes: Vec<MessDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(messes.len(), 2);

    Ok(())
}

/// Tests the mess detail view.
///
/// Expected: 200 OK with id, name, and menu.
#[tokio::test]
async fn gets_mess_with_menu() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let mess_model = test
        .mess()
        .insert_mess("Central", "Rice, dal, seasonal curry")
        .await?;

    let result = get_mess(State(test.app_state()), Path(mess_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let mess: MessDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(mess.id, mess_model.id);
    assert_eq!(mess.menu, "Rice, dal, seasonal curry");

    Ok(())
}

/// Tests the mess detail view for an ID that does not exist.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn returns_not_found_for_nonexistent_mess() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;

    let nonexistent_mess_id = 1;
    let result = get_mess(State(test.app_state()), Path(nonexistent_mess_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
