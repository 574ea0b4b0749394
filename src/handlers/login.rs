use crate::conn::Conn;
use crate::error::Error;
use crate::{store, validate};
use argon2::{password_hash, Argon2, PasswordHash, PasswordVerifier};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Req {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Resp {
    pub message: String,
}

#[tracing::instrument(skip(req))]
pub async fn handler(Conn(mut conn): Conn, Json(req): Json<Req>) -> Result<Json<Resp>, Error> {
    let errors = validate::login(&req.username, &req.password);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let user = store::find_by_username(&mut conn, &req.username)
        .await?
        .ok_or(Error::Unauthorized)?;

    let hash = PasswordHash::new(&user.password)?;

    if let Err(err) = Argon2::default().verify_password(req.password.as_bytes(), &hash) {
        if err == password_hash::Error::Password {
            return Err(Error::Unauthorized);
        }

        tracing::error!(?err, "error verifying password");
        return Err(Error::Internal);
    }

    Ok(Json(Resp {
        message: "Login successful.".to_string(),
    }))
}
