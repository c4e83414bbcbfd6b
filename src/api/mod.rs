// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AuthResponse, Certification, CertificationListResponse, CertificationMutationResponse,
        CreateCertificationRequest, CreateUserCertRequest, DeleteResponse, DeleteUserCertsRequest,
        LoginRequest, RegisterRequest, UpdateCertificationRequest, UpdateProfileRequest,
        UpdateUserCertRequest, UserCertListResponse, UserCertMutationResponse, UserCertView,
        UserProfile,
    },
    state::AppState,
};

pub mod auth;
pub mod certifications;
pub mod health;
pub mod user_certs;
pub mod users;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route(
            "/users/me",
            get(users::get_current_user).put(users::update_profile),
        )
        .route(
            "/certifications",
            get(certifications::list_certifications).post(certifications::create_certification),
        )
        .route(
            "/certifications/{certification_id}",
            put(certifications::update_certification).delete(certifications::delete_certification),
        )
        .route(
            "/user-certs",
            get(user_certs::list_user_certs)
                .post(user_certs::create_user_cert)
                .delete(user_certs::delete_user_certs),
        )
        .route("/user-certs/{user_cert_id}", put(user_certs::update_user_cert))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        users::get_current_user,
        users::update_profile,
        certifications::list_certifications,
        certifications::create_certification,
        certifications::update_certification,
        certifications::delete_certification,
        user_certs::list_user_certs,
        user_certs::create_user_cert,
        user_certs::update_user_cert,
        user_certs::delete_user_certs,
        health::health
    ),
    components(
        schemas(
            AuthResponse,
            RegisterRequest,
            LoginRequest,
            UserProfile,
            UpdateProfileRequest,
            Certification,
            CreateCertificationRequest,
            UpdateCertificationRequest,
            CertificationListResponse,
            CertificationMutationResponse,
            UserCertView,
            CreateUserCertRequest,
            UpdateUserCertRequest,
            DeleteUserCertsRequest,
            UserCertListResponse,
            UserCertMutationResponse,
            DeleteResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "User profile access"),
        (name = "Certifications", description = "Shared certification catalog"),
        (name = "UserCerts", description = "Per-user certification records"),
        (name = "Health", description = "Liveness")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::store::InMemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::new(
            InMemoryStore::new(),
            TokenService::from_secret("router-test-secret").unwrap(),
        );
        router(state)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = test_app();
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn register_then_fetch_profile_end_to_end() {
        let app = test_app();

        let register = serde_json::json!({
            "first_name": "Alice",
            "last_name": "Smith",
            "username": "alice123",
            "password": "password123",
            "industry": "Security",
            "user_role": "Analyst",
        });

        let response = app
            .clone()
            .oneshot(post_json("/v1/auth/register", register.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        let token = body["token"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/users/me")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["username"], "alice123");

        // Registering the same username again conflicts.
        let response = app
            .clone()
            .oneshot(post_json("/v1/auth/register", register))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Username already exists");
    }

    #[tokio::test]
    async fn guard_classification_end_to_end() {
        let app = test_app();

        // No token at all is a 400.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/users/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // A malformed token is a 403.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/users/me")
                    .header("Authorization", "Bearer random text")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
