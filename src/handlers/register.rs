use crate::conn::Conn;
use crate::error::Error;
use crate::{store, validate};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Req {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Resp {
    pub message: String,
}

#[tracing::instrument(skip(req))]
pub async fn handler(Conn(mut conn): Conn, Json(req): Json<Req>) -> Result<Json<Resp>, Error> {
    let errors = validate::registration(&req.username, &req.email, &req.password);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    // Best-effort pre-check; the unique index on usernames is the real guard.
    let existing = store::find_by_username(&mut conn, &req.username).await?;
    if existing.is_some() {
        return Err(Error::Conflict);
    }

    // Second look at the email, matching the order the original checks ran in.
    if !validate::email_is_valid(&req.email) {
        return Err(Error::Validation(vec!["Email format is invalid.".to_string()]));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)?
        .to_string();

    store::insert(&mut conn, &req.username, &req.email, &hash).await?;

    Ok(Json(Resp {
        message: "Registration successful.".to_string(),
    }))
}
