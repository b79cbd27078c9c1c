//! HTTP API integration tests
//!
//! Authentication, boards and membership, access control and notifications,
//! driven through the router in-process.

mod common;

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::{Method, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uuid::Uuid;

    use crate::common::*;
    use crate::{assert_contains, assert_error_body};

    #[tokio::test]
    async fn test_register_login_and_me() {
        let app = TestApp::new().await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "password": "password123"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["token"].is_string());

        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": "ada@example.com", "password": "password123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        let (status, me) = app.get("/api/auth/me", &token).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["email"], "ada@example.com");
        assert_eq!(me["name"], "Ada");
        assert!(me.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_register_validation_and_duplicates() {
        let app = TestApp::new().await;
        let client = &app;
        let register = move |body: serde_json::Value| {
            client.request(Method::POST, "/api/auth/register", None, Some(body))
        };

        let message = assert_error_body!(
            register(json!({ "email": "a@example.com" })).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(message, "Missing Credentials");

        assert_error_body!(
            register(json!({ "name": "A", "email": "not-an-email", "password": "password123" })).await,
            StatusCode::BAD_REQUEST
        );
        assert_error_body!(
            register(json!({ "name": "A", "email": "a@example.com", "password": "short" })).await,
            StatusCode::BAD_REQUEST
        );

        create_test_user(app.db.pool(), "taken@example.com", "password123").await;
        let message = assert_error_body!(
            register(json!({ "name": "B", "email": "taken@example.com", "password": "password123" })).await,
            StatusCode::CONFLICT
        );
        assert_eq!(message, "User already exists");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let app = TestApp::new().await;
        let user = create_unique_test_user(app.db.pool()).await;

        let message = assert_error_body!(
            app.request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": user.email, "password": "wrong-password" })),
            )
            .await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(message, "Invalid Credential");

        assert_error_body!(
            app.request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": "nobody@example.com", "password": user.password })),
            )
            .await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_protected_routes_require_valid_token() {
        let app = TestApp::new().await;
        let list_id = Uuid::new_v4();

        for (method, path) in [
            (Method::GET, "/api/auth/me".to_string()),
            (Method::GET, "/api/boards".to_string()),
            (Method::GET, format!("/api/cards/{}", list_id)),
            (Method::PATCH, "/api/cards/reorder".to_string()),
            (Method::PATCH, "/api/lists/reorder".to_string()),
        ] {
            let (status, _) = app.request(method.clone(), &path, None, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, path);

            let (status, _) = app
                .request(method.clone(), &path, Some("not-a-jwt"), None)
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, path);
        }
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_is_rejected() {
        let app = TestApp::new().await;
        let token = generate_test_token(Uuid::new_v4(), "ghost@example.com");
        let (status, _) = app.get("/api/boards", &token).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_boards_owned_and_shared() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        let guest = create_unique_test_user(app.db.pool()).await;

        let board_id = app.create_board(&owner.token, "Roadmap").await;
        let (status, body) = app
            .post(
                &format!("/api/boards/{}/invite", board_id),
                &owner.token,
                json!({ "email": guest.email }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Invitation sent successfully!");
        assert_eq!(body["member"]["role"], "editor");

        let (_, mine) = app.get("/api/boards", &owner.token).await;
        assert_eq!(mine["my_boards"].as_array().unwrap().len(), 1);
        assert!(mine["shared_boards"].as_array().unwrap().is_empty());

        let (_, theirs) = app.get("/api/boards", &guest.token).await;
        let shared = theirs["shared_boards"].as_array().unwrap();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0]["title"], "Roadmap");
        assert_eq!(shared[0]["role"], "editor");

        let (status, view) = app.get(&format!("/api/boards/{}", board_id), &guest.token).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["user_role"], "editor");

        let (_, view) = app.get(&format!("/api/boards/{}", board_id), &owner.token).await;
        assert_eq!(view["user_role"], "owner");
    }

    #[tokio::test]
    async fn test_board_creation_requires_title() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        assert_error_body!(
            app.post("/api/boards", &owner.token, json!({ "title": "   " })).await,
            StatusCode::BAD_REQUEST
        );
        assert_error_body!(
            app.post("/api/boards", &owner.token, json!({})).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_invitation_creates_membership_and_notification() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        let guest = create_unique_test_user(app.db.pool()).await;
        let board_id = app.create_board(&owner.token, "Launch").await;

        let (status, _) = app
            .post(
                &format!("/api/boards/{}/invite", board_id),
                &owner.token,
                json!({ "email": guest.email }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(app.db.count("board_members").await, 1);

        let (status, inbox) = app.get("/api/notifications", &guest.token).await;
        assert_eq!(status, StatusCode::OK);
        let inbox = inbox.as_array().unwrap();
        assert_eq!(inbox.len(), 1);
        assert_contains!(inbox[0]["message"].as_str().unwrap(), "\"Launch\"");
        assert_eq!(inbox[0]["is_read"], false);
    }

    #[tokio::test]
    async fn test_invitation_rules() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        let guest = create_unique_test_user(app.db.pool()).await;
        let board_id = app.create_board(&owner.token, "Rules").await;
        let invite = format!("/api/boards/{}/invite", board_id);

        assert_error_body!(
            app.post(&invite, &guest.token, json!({ "email": owner.email })).await,
            StatusCode::FORBIDDEN
        );
        assert_error_body!(
            app.post(&invite, &owner.token, json!({ "email": "nobody@example.com" })).await,
            StatusCode::NOT_FOUND
        );
        assert_error_body!(
            app.post(&invite, &owner.token, json!({ "email": owner.email })).await,
            StatusCode::BAD_REQUEST
        );

        let (status, _) = app.post(&invite, &owner.token, json!({ "email": guest.email })).await;
        assert_eq!(status, StatusCode::OK);
        assert_error_body!(
            app.post(&invite, &owner.token, json!({ "email": guest.email })).await,
            StatusCode::CONFLICT
        );

        assert_error_body!(
            app.post(
                &format!("/api/boards/{}/invite", Uuid::new_v4()),
                &owner.token,
                json!({ "email": guest.email }),
            )
            .await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_non_members_are_forbidden() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        let stranger = create_unique_test_user(app.db.pool()).await;

        let board_id = app.create_board(&owner.token, "Private").await;
        let list_id = app.create_list(&owner.token, board_id, "Todo").await;
        let card_id = app.create_card(&owner.token, list_id, "Secret").await;

        assert_error_body!(
            app.get(&format!("/api/boards/{}", board_id), &stranger.token).await,
            StatusCode::FORBIDDEN
        );
        assert_error_body!(
            app.get(&format!("/api/lists/{}", board_id), &stranger.token).await,
            StatusCode::FORBIDDEN
        );
        assert_error_body!(
            app.get(&format!("/api/cards/{}", list_id), &stranger.token).await,
            StatusCode::FORBIDDEN
        );
        assert_error_body!(
            app.post(
                "/api/cards",
                &stranger.token,
                json!({ "title": "Intruder", "list_id": list_id }),
            )
            .await,
            StatusCode::FORBIDDEN
        );
        assert_error_body!(
            app.patch(
                "/api/cards/reorder",
                &stranger.token,
                json!({ "cards": [{ "id": card_id, "order": 5 }] }),
            )
            .await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(app.db.card_order(card_id).await, 1);

        assert_error_body!(
            app.get(&format!("/api/boards/{}", Uuid::new_v4()), &owner.token).await,
            StatusCode::NOT_FOUND
        );
        assert_error_body!(
            app.get(&format!("/api/cards/{}", Uuid::new_v4()), &owner.token).await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_notifications_mark_read_and_clear() {
        let app = TestApp::new().await;
        let owner = create_unique_test_user(app.db.pool()).await;
        let guest = create_unique_test_user(app.db.pool()).await;
        for title in ["One", "Two"] {
            let board_id = app.create_board(&owner.token, title).await;
            app.post(
                &format!("/api/boards/{}/invite", board_id),
                &owner.token,
                json!({ "email": guest.email }),
            )
            .await;
        }

        let (_, inbox) = app.get("/api/notifications", &guest.token).await;
        let inbox = inbox.as_array().unwrap().clone();
        assert_eq!(inbox.len(), 2);
        let first = inbox[0]["id"].as_str().unwrap().to_string();

        // Another user's notification is invisible to the caller
        assert_error_body!(
            app.request(
                Method::PUT,
                &format!("/api/notifications/{}", first),
                Some(&owner.token),
                None,
            )
            .await,
            StatusCode::NOT_FOUND
        );

        let (status, ack) = app
            .request(
                Method::PUT,
                &format!("/api/notifications/{}", first),
                Some(&guest.token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["affected"], 1);

        let (status, ack) = app
            .request(Method::DELETE, "/api/notifications/clear", Some(&guest.token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["affected"], 1);

        let (_, inbox) = app.get("/api/notifications", &guest.token).await;
        assert_eq!(inbox.as_array().unwrap().len(), 1);
        assert_eq!(inbox[0]["is_read"], false);
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let app = TestApp::new().await;
        let (status, body) = app.request(Method::GET, "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = app.request(Method::GET, "/api/nope", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_malformed_path_id_gets_json_error() {
        let app = TestApp::new().await;
        let user = create_unique_test_user(app.db.pool()).await;

        for (method, path, body) in [
            (Method::GET, "/api/cards/not-a-uuid", None),
            (Method::GET, "/api/lists/not-a-uuid", None),
            (Method::GET, "/api/boards/not-a-uuid", None),
            (Method::PUT, "/api/notifications/not-a-uuid", None),
            (
                Method::PUT,
                "/api/cards/not-a-uuid",
                Some(json!({ "list_id": Uuid::new_v4(), "order": 1 })),
            ),
        ] {
            let message = assert_error_body!(
                app.request(method, path, Some(user.token.as_str()), body).await,
                StatusCode::BAD_REQUEST
            );
            assert_contains!(message, "Invalid path");
        }
    }
}
