//! Integration tests for the activity HTTP API.
//!
//! The full router runs against in-memory stores and a mock token verifier:
//! 1. Authentication is enforced on every `/api` route
//! 2. Activities commit through to the store and come back in responses
//! 3. Domain failures map onto the documented status codes

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use solo_mind::adapters::http::{api_router, ActivityAppState};
use solo_mind::adapters::{InMemoryExerciseCatalog, InMemoryPlayerStore, MockTokenVerifier};
use solo_mind::ports::PlayerRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "player-token";

struct TestApp {
    router: Router,
    store: Arc<InMemoryPlayerStore>,
}

/// Router with one registered player (id 1) reachable through `TOKEN`.
async fn test_app() -> TestApp {
    let store = Arc::new(InMemoryPlayerStore::new());
    let player = store
        .create("Jin-Woo", "jinwoo@example.com", "hash")
        .await
        .unwrap();
    assert_eq!(player.id().as_i64(), 1);

    let catalog = Arc::new(InMemoryExerciseCatalog::with_defaults().unwrap());
    let verifier = Arc::new(MockTokenVerifier::new().with_test_user(TOKEN, 1));

    let state = ActivityAppState::new(store.clone(), catalog);
    TestApp {
        router: api_router(state, verifier),
        store,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn missing_token_is_rejected() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/api/profile")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/api/profile")
        .header(header::AUTHORIZATION, "Bearer forged")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn health_needs_no_token() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn profile_of_fresh_player() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/profile")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], 1);
    assert_eq!(body["level"], 1);
    assert_eq!(body["isReadingUnlocked"], false);
    assert_eq!(body["user"]["name"], "Jin-Woo");
    assert!(body["user"].get("credentialHash").is_none());
}

#[tokio::test]
async fn exercises_are_listed_in_id_order() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/exercises")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Push-ups", "Pull-ups", "Squats"]);
}

// =============================================================================
// Activities
// =============================================================================

#[tokio::test]
async fn exercise_awards_xp_and_unlocks_reading() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 1, "reps": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["xpGained"], 30);
    assert_eq!(body["updatedProfile"]["isReadingUnlocked"], true);
    assert_eq!(body["updatedUser"]["approachesCompleted"], 1);
    assert_eq!(body["updatedUser"]["muscleTension"]["push"], 10.0);

    let log = app.store.activity_log().unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn training_set_grants_no_xp() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/activity/exercise",
            json!({ "exerciseId": 3, "reps": 20, "isTrainingMode": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["xpGained"], 0);
    assert_eq!(body["updatedProfile"]["isReadingUnlocked"], false);
    assert_eq!(body["updatedUser"]["totalBodyEffort"], 16.0);
}

#[tokio::test]
async fn unknown_exercise_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 99, "reps": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EXERCISE_NOT_FOUND");
    assert!(app.store.activity_log().unwrap().is_empty());
}

#[tokio::test]
async fn non_positive_exercise_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 0, "reps": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EXERCISE_NOT_FOUND");
}

#[tokio::test]
async fn missing_reps_is_a_validation_error() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn non_positive_reps_leave_the_player_untouched() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 1, "reps": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, profile) = send(&app, get("/api/profile")).await;
    assert_eq!(profile["version"], 0);
    assert_eq!(profile["user"]["approachesCompleted"], 0);
}

#[tokio::test]
async fn wrong_quiz_answer_is_not_an_error() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/activity/submit-quiz",
            json!({ "userAnswer": "B", "correctAnswer": "A" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("updatedUser").is_none());
    assert!(app.store.activity_log().unwrap().is_empty());
}

#[tokio::test]
async fn exercise_then_quiz_cycles_the_gate() {
    let app = test_app().await;

    send(
        &app,
        post("/api/activity/exercise", json!({ "exerciseId": 1, "reps": 10 })),
    )
    .await;
    let (status, body) = send(
        &app,
        post(
            "/api/activity/submit-quiz",
            json!({ "userAnswer": "A", "correctAnswer": "A" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["updatedUser"]["quizzesPassed"], 1);
    assert_eq!(body["updatedProfile"]["isReadingUnlocked"], false);
    assert_eq!(body["updatedProfile"]["version"], 2);
}

#[tokio::test]
async fn reading_credits_mind_effort() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/activity/reading",
            json!({ "recognizedText": "a".repeat(250) }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mindEffortGained"], 25.0);
    assert_eq!(body["updatedUser"]["totalMindEffort"], 25.0);
}

#[tokio::test]
async fn blank_reading_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        post("/api/activity/reading", json!({ "recognizedText": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}
