use sqlx::{FromRow, PgConnection};

/// A user row. Created exactly once at registration and never updated or
/// deleted afterwards.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,

    /// Argon2 PHC string, never the plaintext password.
    pub password: String,
}

/// Look up a user by username. Usernames are unique, so this returns at most
/// one row.
pub async fn find_by_username(
    conn: &mut PgConnection,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password FROM users WHERE username = $1 LIMIT 1",
    )
    .bind(username)
    .fetch_optional(conn)
    .await
}

/// Insert a new user. The store assigns the id. Fails with a
/// unique-violation database error if the username is already taken.
pub async fn insert(
    conn: &mut PgConnection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) \
        RETURNING id, username, email, password",
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(conn)
    .await
}
