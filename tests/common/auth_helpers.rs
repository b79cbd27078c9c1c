//! Authentication test helpers
//!
//! Creates users directly in the database and signs tokens with the
//! fixture's auth settings.

use sqlx::SqlitePool;
use uuid::Uuid;

use kanflow::backend::auth::sessions::create_token;
use kanflow::backend::auth::users::create_user;

use super::database::test_auth_settings;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, 4).expect("Failed to hash password");
    let name = email.split('@').next().unwrap_or(email);

    let user = create_user(pool, name, email, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = generate_test_token(user.id, &user.email);

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(pool: &SqlitePool) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    create_test_user(pool, &email, "test_password_123").await
}

/// Generate a test JWT token
pub fn generate_test_token(user_id: Uuid, email: &str) -> String {
    create_token(&test_auth_settings(), user_id, email).expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
