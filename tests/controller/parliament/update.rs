//! Tests for the parliament update endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use campus::{
    controller::parliament::update::{
        create_update, downvote_update, get_update, list_updates, upvote_update,
    },
    model::parliament::{CreateUpdateDto, UpdateDto},
};
use campus_test_utils::prelude::*;

/// Tests update creation and listing together.
///
/// Expected: 201 Created, then a listing containing the new update.
#[tokio::test]
async fn creates_and_lists_updates() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;

    let created = create_update(
        State(test.app_state()),
        Json(CreateUpdateDto {
            title: "Budget week".to_string(),
            description: "Hall budgets posted.".to_string(),
        }),
    )
    .await;

    assert!(created.is_ok());
    assert_eq!(
        created.unwrap().into_response().status(),
        StatusCode::CREATED
    );

    let result = list_updates(State(test.app_state())).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let updates: Vec<UpdateDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].title, "Budget week");

    Ok(())
}

/// Tests the update detail view for a missing ID.
///
/// Expected: 404 Not Found.
#[tokio::test]
async fn returns_not_found_for_nonexistent_update() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;

    let nonexistent_update_id = 1;
    let result = get_update(State(test.app_state()), Path(nonexistent_update_id)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Tests both vote directions on an update.
///
/// Expected: counters move independently.
#[tokio::test]
async fn votes_move_counters_independently() -> Result<(), TestError> {
    let test = test_setup_with_campus_tables!()?;
    let update_model = test.parliament().insert_update("Budget week").await?;

    for _ in 0..2 {
        let upvote = upvote_update(State(test.app_state()), Path(update_model.id)).await;
        assert!(upvote.is_ok());
    }
    let result = downvote_update(State(test.app_state()), Path(update_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let update: UpdateDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(update.upvotes, 2);
    assert_eq!(update.downvotes, 1);

    Ok(())
}
