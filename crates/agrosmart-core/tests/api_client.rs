//! Mock server tests for the API client.
//!
//! These tests use wiremock to simulate the AgroSmart backend and exercise
//! bearer attachment, the refresh-and-retry protocol, and the CRUD shapes
//! without network access.

use std::time::Duration;

use agrosmart_core::api::{ApiError, RefreshPolicy};
use agrosmart_core::auth::AuthState;
use agrosmart_core::models::{
    Animal, AnimalDraft, AnimalStatus, AuthResponse, Breed, BreedDraft, FarmRequest, LoginRequest,
    Lot, Milking, MilkingDraft, PageRequest, Paddock, PaddockType, RegisterRequest, Sex,
    Shift,
};
use agrosmart_core::{ApiClient, SessionStore};
use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer, session: SessionStore) -> ApiClient {
    ApiClient::new(&server.uri(), session).expect("Failed to build client")
}

fn signed_in(token: &str, refresh_token: Option<&str>) -> SessionStore {
    let session = SessionStore::in_memory();
    session
        .save(&AuthResponse {
            token: token.to_string(),
            refresh_token: refresh_token.map(str::to_string),
            user: None,
        })
        .expect("Failed to save session");
    session
}

fn animal_json(id: i64, name: &str) -> Value {
    json!({"id": id, "name": name, "earring": format!("A-{}", id), "sex": "FEMALE", "status": "ACTIVE"})
}

fn page_json(items: Vec<Value>, total: u64) -> Value {
    json!({
        "items": items,
        "paginationInfo": {
            "currentPage": 0,
            "pageSize": 100,
            "totalPages": 1,
            "totalItems": total,
            "hasNext": false,
            "hasPrevious": false,
            "isFirst": true,
            "isLast": true
        }
    })
}

fn milking_draft(animal_id: i64) -> MilkingDraft {
    MilkingDraft {
        date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
        shift: Shift::Morning,
        quantity: 10.0,
        observations: None,
        animal_id,
    }
}

async fn requests_to(server: &MockServer, route: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .into_iter()
        .filter(|r| r.url.path() == route)
        .collect()
}

// ============================================================================
// Request stage
// ============================================================================

#[tokio::test]
async fn test_login_then_list_carries_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "u@x.com", "password": "secret1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "T1", "refreshToken": "R1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/animals"))
        .and(query_param("page", "0"))
        .and(query_param("size", "100"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![animal_json(11, "Lola"), animal_json(12, "Luna")], 2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, SessionStore::in_memory());
    let auth = client
        .login(&LoginRequest::new("u@x.com", "secret1"))
        .await
        .expect("login");
    assert_eq!(auth, AuthResponse::new("T1", "R1"));
    assert_eq!(client.session().token().as_deref(), Some("T1"));
    assert_eq!(client.session().refresh_token().as_deref(), Some("R1"));

    let page = client
        .resource::<Animal>()
        .list(1, &PageRequest::default())
        .await
        .expect("list animals");
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination_info.current_page, 0);
    assert_eq!(page.total_items(), 2);
    assert_eq!(page.items[0].name, "Lola");

    let login = requests_to(&server, "/api/auth/login").await;
    assert!(login[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1, "name": "Holstein"}, {"id": 2, "name": "Jersey"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, SessionStore::in_memory());
    let breeds = client.resource::<Breed>().list(1, &()).await.expect("list breeds");
    assert_eq!(breeds.len(), 2);
    assert_eq!(breeds[1].name, "Jersey");

    let received = requests_to(&server, "/api/farm/1/breeds").await;
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/3/lots"))
        .and(header("ngrok-skip-browser-warning", "true"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));
    let lots = client
        .resource::<Lot>()
        .list(3, &PageRequest::default())
        .await
        .expect("list lots");
    assert!(lots.items.is_empty());
}

// ============================================================================
// Refresh and retry
// ============================================================================

#[tokio::test]
async fn test_unauthorized_refreshes_and_retries_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(body_json(json!({"refreshToken": "R1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "new", "refreshToken": "R2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Gyr"}])))
        .expect(1)
        .mount(&server)
        .await;

    let session = signed_in("old", Some("R1"));
    let client = client_for(&server, session.clone());

    let breeds = client.resource::<Breed>().list(1, &()).await.expect("list after refresh");
    assert_eq!(breeds[0].name, "Gyr");
    assert_eq!(session.token().as_deref(), Some("new"));
    assert_eq!(session.refresh_token().as_deref(), Some("R2"));

    let refresh = requests_to(&server, "/api/auth/refresh").await;
    assert!(refresh[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_forbidden_refreshes_and_keeps_unrotated_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/animals/11"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/animals/11"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(animal_json(11, "Lola")))
        .expect(1)
        .mount(&server)
        .await;

    let session = signed_in("old", Some("R1"));
    let client = client_for(&server, session.clone());

    let animal = client.resource::<Animal>().get(1, 11).await.expect("get animal");
    assert_eq!(animal.id, 11);
    assert_eq!(session.token().as_deref(), Some("new"));
    assert_eq!(session.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_second_unauthorized_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/lots"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "new", "refreshToken": "R2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = signed_in("old", Some("R1"));
    let client = client_for(&server, session.clone());

    let err = client
        .resource::<Lot>()
        .list(1, &PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));

    let lots = requests_to(&server, "/api/farm/1/lots").await;
    assert_eq!(
        lots[1].headers.get("authorization").map(|v| v.to_str().unwrap_or_default()),
        Some("Bearer new")
    );
    // The refreshed session stays; only an unrecoverable refresh ends it.
    assert_eq!(session.token().as_deref(), Some("new"));
}

#[tokio::test]
async fn test_missing_refresh_token_clears_session_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/paddocks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = signed_in("old", None);
    let state = session.subscribe();
    let client = client_for(&server, session.clone());

    let err = client
        .resource::<Paddock>()
        .list(1, &PageRequest::default())
        .await
        .unwrap_err();
    match err {
        ApiError::Unauthorized(ref message) => {
            assert_eq!(message.message.as_deref(), Some("Token expired"))
        }
        other => panic!("expected the original 401, got {:?}", other),
    }
    assert!(err.requires_login());
    assert!(!session.is_authenticated());
    assert_eq!(*state.borrow(), AuthState::SignedOut);
}

#[tokio::test]
async fn test_refresh_failure_surfaces_refresh_error_and_clears_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/animals"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"code": "INVALID_REFRESH_TOKEN", "message": "Refresh token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = signed_in("old", Some("stale"));
    let client = client_for(&server, session.clone());

    let err = client
        .resource::<Animal>()
        .list(1, &PageRequest::default())
        .await
        .unwrap_err();

    match err {
        ApiError::SessionExpired(ref inner) => {
            assert!(matches!(**inner, ApiError::Rejected { status: 400, .. }));
        }
        other => panic!("expected SessionExpired, got {:?}", other),
    }
    assert_eq!(err.code(), Some("INVALID_REFRESH_TOKEN"));
    assert!(err.requires_login());
    assert!(!session.is_authenticated());
    assert_eq!(session.refresh_token(), None);
}

#[tokio::test]
async fn test_other_errors_propagate_without_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Breed not found"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = signed_in("T1", Some("R1"));
    let client = client_for(&server, session.clone());

    let err = client.resource::<Breed>().list(1, &()).await.unwrap_err();
    assert!(matches!(err, ApiError::ServerError(500, _)));

    let err = client.resource::<Breed>().get(1, 99).await.unwrap_err();
    assert_eq!(err.to_string(), "Resource not found: Breed not found");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_concurrent_unauthorized_share_one_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "new", "refreshToken": "R2"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("old", Some("R1")));
    let breeds = client.resource::<Breed>();

    let (first, second) = tokio::join!(breeds.list(1, &()), breeds.list(1, &()));
    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(client.session().refresh_token().as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_clear_on_unauthorized_policy_never_refreshes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/milkings"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = signed_in("old", Some("R1"));
    let client = ApiClient::with_options(
        &server.uri(),
        session.clone(),
        RefreshPolicy::ClearOnUnauthorized,
        Duration::from_secs(5),
    )
    .expect("client");

    let err = client
        .resource::<Milking>()
        .list(1, &PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert!(!session.is_authenticated());
}

// ============================================================================
// Auth endpoints and validation
// ============================================================================

#[tokio::test]
async fn test_register_conflict_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "USER_ALREADY_EXISTS",
            "message": "Ya existe una cuenta con este email"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, SessionStore::in_memory());
    let request = RegisterRequest {
        email: "u@x.com".to_string(),
        password: "secret1".to_string(),
        dni: "1234567".to_string(),
        name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        farm: FarmRequest {
            name: "La Esperanza".to_string(),
            description: "Lechería".to_string(),
            location: "Boyacá".to_string(),
        },
    };

    let err = client.register(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.code(), Some("USER_ALREADY_EXISTS"));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_failed_login_does_not_trigger_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Credenciales inválidas"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = signed_in("previous", Some("R0"));
    let client = client_for(&server, session.clone());

    let err = client
        .login(&LoginRequest::new("u@x.com", "wrongpass"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(session.token().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_validation_errors_never_reach_the_server() {
    let server = MockServer::start().await;
    let client = client_for(&server, signed_in("T1", Some("R1")));

    let err = client
        .login(&LoginRequest::new("u@x.com", "123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = client
        .resource::<Breed>()
        .create(1, &BreedDraft::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = client
        .resource::<Milking>()
        .update(1, 5, &milking_draft(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let received = server.received_requests().await.expect("recording");
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_logout_clears_and_signals() {
    let server = MockServer::start().await;
    let session = signed_in("T1", Some("R1"));
    let state = session.subscribe();
    let client = client_for(&server, session.clone());

    client.logout().expect("logout");
    assert!(!session.is_authenticated());
    assert_eq!(*state.borrow(), AuthState::SignedOut);

    client.logout().expect("logout twice");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let client = ApiClient::with_options(
        "http://127.0.0.1:1",
        SessionStore::in_memory(),
        RefreshPolicy::Refresh,
        Duration::from_secs(2),
    )
    .expect("client");

    let err = client.resource::<Breed>().list(1, &()).await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
    assert!(err.to_string().starts_with("Cannot reach server"));
}

// ============================================================================
// CRUD shapes
// ============================================================================

#[tokio::test]
async fn test_create_update_delete_animal() {
    let server = MockServer::start().await;

    let draft = AnimalDraft {
        name: "Lola".to_string(),
        earring: "A-11".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2021, 3, 14).expect("valid date"),
        sex: Sex::Female,
        lot_id: 1,
        breed_id: 2,
        paddock_id: 3,
        entry: None,
        acquisition: None,
        origin: None,
        status: AnimalStatus::Active,
        weight: Some(410.0),
        color: None,
        observations: None,
    };

    Mock::given(method("POST"))
        .and(path("/api/farm/1/animals"))
        .and(body_json(serde_json::to_value(&draft).expect("encode draft")))
        .respond_with(ResponseTemplate::new(201).set_body_json(animal_json(11, "Lola")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/farm/1/animals/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(animal_json(11, "Lola II")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/farm/1/animals/11"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));
    let animals = client.resource::<Animal>();

    let created = animals.create(1, &draft).await.expect("create");
    assert_eq!(created.id, 11);

    let renamed = AnimalDraft {
        name: "Lola II".to_string(),
        ..draft
    };
    let updated = animals.update(1, 11, &renamed).await.expect("update");
    assert_eq!(updated.name, "Lola II");

    animals.delete(1, 11).await.expect("delete");
}

#[tokio::test]
async fn test_milking_update_replaces_with_put() {
    let server = MockServer::start().await;
    let draft = MilkingDraft {
        quantity: 14.5,
        ..milking_draft(11)
    };

    Mock::given(method("PUT"))
        .and(path("/api/farm/2/milkings/5"))
        .and(body_json(json!({
            "date": "2024-06-01", "shift": "MORNING", "quantity": 14.5, "animalId": 11
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "date": "2024-06-01", "shift": "MORNING", "quantity": 14.5, "animalId": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));
    let milking = client
        .resource::<Milking>()
        .update(2, 5, &draft)
        .await
        .expect("update milking");
    assert_eq!(milking.quantity, 14.5);

    let received = server.received_requests().await.expect("recording");
    assert!(received.iter().all(|r| r.method.as_str() == "PUT"));
}

#[tokio::test]
async fn test_lots_and_paddocks_are_paginated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/lots"))
        .and(query_param("page", "0"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                json!({"id": 1, "name": "Novillas"}),
                json!({"id": 2, "name": "Horras"}),
            ],
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/paddocks"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![json!({"id": 4, "name": "Potrero Norte", "type": "CORRAL", "surface": 2.5})],
            11,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));

    let lots = client
        .resource::<Lot>()
        .list(1, &PageRequest::default())
        .await
        .expect("list lots");
    assert_eq!(lots.items.len(), 2);
    assert_eq!(lots.items[1].name, "Horras");
    assert_eq!(lots.total_items(), 2);

    let paddocks = client
        .resource::<Paddock>()
        .list(1, &PageRequest::new(1, 10))
        .await
        .expect("list paddocks");
    assert_eq!(paddocks.items[0].kind, PaddockType::Corral);
    assert_eq!(paddocks.total_items(), 11);
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));
    let err = client.resource::<Breed>().list(1, &()).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_dashboard_counts_every_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farm/1/animals"))
        .and(query_param("size", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(vec![animal_json(1, "Lola")], 42)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/farm/1/milkings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 310)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/farm/1/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Gyr"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/farm/1/lots"))
        .and(query_param("size", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![json!({"id": 1, "name": "Novillas"})],
            2,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/farm/1/paddocks"))
        .and(query_param("size", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in("T1", Some("R1")));
    let summary = client.dashboard(1).await.expect("dashboard");

    assert_eq!(summary.animals, 42);
    assert_eq!(summary.milkings, 310);
    assert_eq!(summary.breeds, 1);
    assert_eq!(summary.lots, 2);
    assert_eq!(summary.paddocks, 0);
}
