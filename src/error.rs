use argon2::password_hash;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// This should be the same for both missing accounts and incorrect passwords
/// so as not to give additional information about what accounts exist to
/// someone probing the system.
pub static BAD_LOGIN_MESSAGE: &str = "Incorrect username or password.";

/// An error from the API
#[derive(Debug, PartialEq)]
pub enum Error {
    /// One or more request fields failed structural validation. Carries the
    /// full set of field messages, not just the first failure.
    Validation(Vec<String>),

    /// The requested username is already taken.
    Conflict,

    /// Unknown username or wrong password; the two are indistinguishable.
    Unauthorized,

    /// Something went wrong which we should log but not expose to clients.
    Internal,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, "Invalid request data.", errors)
            }
            Self::Conflict => (
                StatusCode::CONFLICT,
                "A user with this username already exists.",
                vec![],
            ),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, BAD_LOGIN_MESSAGE, vec![]),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                vec![],
            ),
        };

        let body = Json(json!({
            "message": message,
            "errors": errors,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        // The unique index on usernames is the authoritative guard; a lost
        // check-then-insert race lands here and reports the same conflict as
        // the pre-check.
        if err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            return Self::Conflict;
        }

        tracing::error!(?err, "sqlx error");
        Self::Internal
    }
}

impl From<password_hash::Error> for Error {
    fn from(err: password_hash::Error) -> Self {
        tracing::error!(?err, "password hashing error");
        Self::Internal
    }
}
