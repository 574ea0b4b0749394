use crate::store;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use sqlx::{pool::PoolConnection, Postgres};

/// A registered user for use in testing
pub struct TestUser {
    pub username: String,
    pub password: String,
}

impl TestUser {
    /// Insert a user with a properly hashed password and return the
    /// plaintext credentials for the test to log in with.
    pub async fn create(conn: &mut PoolConnection<Postgres>) -> Self {
        let username = String::from("alice");
        let password = String::from("secret1");

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("failed to hash password")
            .to_string();

        store::insert(conn, &username, "alice@example.com", &hash)
            .await
            .expect("failed to insert user");

        TestUser { username, password }
    }
}
