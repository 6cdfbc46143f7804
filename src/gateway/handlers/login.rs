//! Shared-password login and logout.

use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::error::ApiError;
use super::super::pages::{LoginNotice, login_page};
use super::super::state::AppState;
use crate::auth::{expired_session_cookie, session_cookie};

/// Login form body
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Login page
///
/// GET /login
pub async fn login_form(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let notice = if state.auth_state(&headers).is_authenticated() {
        LoginNotice::SignedIn
    } else {
        LoginNotice::None
    };
    Html(login_page(notice))
}

/// Exchange the shared password for a session cookie
///
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Password accepted, `access-token` cookie set"),
        (status = 401, description = "Wrong password, form re-rendered with an error")
    ),
    tag = "Session"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    if !state.password.verify(&form.password) {
        tracing::warn!("Login rejected: wrong password");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Html(login_page(LoginNotice::WrongPassword)),
        )
            .into_response());
    }

    let token = state
        .gate
        .codec()
        .issue()
        .map_err(|e| ApiError::internal("Session token issue failed", e))?;
    tracing::info!("Login accepted, session issued");

    Ok((
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, session_cookie(&token)),
            (header::LOCATION, "/login".to_string()),
        ],
    )
        .into_response())
}

/// Drop the session cookie
///
/// POST /logout
pub async fn logout() -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, expired_session_cookie()),
            (header::LOCATION, "/login".to_string()),
        ],
    )
        .into_response()
}
