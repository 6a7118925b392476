use axum::{
    body::Body,
    extract::{Form, Path, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::error::{AppError, AppResult};
use crate::models::{Entry, EntryForm, LoginInput};
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::views::admin::{create_dashboard_page, create_editor_page, create_login_page};

pub const LOGIN_PATH: &str = "/admin";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
const INVALID_CREDENTIALS: &str = "Invalid access credentials.";

/// Sends anonymous visitors of gated admin routes back to the login page.
pub async fn require_session<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    request: Request<Body>,
    next: Next<Body>,
) -> Response {
    if !state.session.is_authenticated().await {
        tracing::debug!(path = %request.uri().path(), "redirecting anonymous admin request");
        return Redirect::to(LOGIN_PATH).into_response();
    }
    next.run(request).await
}

pub async fn handle_login_page<S: KeyValueStore>(State(state): State<AppState<S>>) -> Response {
    if state.session.is_authenticated().await {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(create_login_page(&state.config, None).into_string()).into_response()
}

pub async fn handle_login_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Form(input): Form<LoginInput>,
) -> AppResult<Response> {
    if state.session.login(&input.password).await? {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }
    Ok((
        StatusCode::UNAUTHORIZED,
        Html(create_login_page(&state.config, Some(INVALID_CREDENTIALS)).into_string()),
    )
        .into_response())
}

pub async fn handle_logout_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> AppResult<Redirect> {
    state.session.logout().await?;
    Ok(Redirect::to(LOGIN_PATH))
}

pub async fn handle_dashboard_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let entries = state.content.list().await;
    Html(create_dashboard_page(&state.config, &entries).into_string())
}

pub async fn handle_new_entry_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let form = EntryForm::from(&Entry::draft());
    Html(create_editor_page(&state.config, &form, true, None).into_string())
}

pub async fn handle_edit_entry_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let entry = state
        .content
        .get_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("entry {id:?}")))?;
    let form = EntryForm::from(&entry);
    Ok(Html(
        create_editor_page(&state.config, &form, false, None).into_string(),
    ))
}

/// Saves the editor form. Invalid input re-renders the editor with the message.
pub async fn handle_save_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<EntryForm>,
) -> AppResult<Response> {
    let existing = state.content.get_by_id(&form.id).await;
    let is_new = existing.is_none();

    match form.clone().into_entry(existing.as_ref()) {
        Ok(entry) => {
            let saved = state.content.save(entry).await?;
            tracing::info!(id = %saved.id, slug = %saved.slug, is_new, "entry saved");
            Ok(Redirect::to(DASHBOARD_PATH).into_response())
        }
        Err(err) => {
            let message = err.to_string();
            Ok((
                StatusCode::BAD_REQUEST,
                Html(create_editor_page(&state.config, &form, is_new, Some(&message)).into_string()),
            )
                .into_response())
        }
    }
}

pub async fn handle_delete_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    state.content.delete(&id).await?;
    tracing::info!(%id, "entry deleted");
    Ok(Redirect::to(DASHBOARD_PATH))
}
