use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::models::{ArticleParams, ContactInput};
use crate::query::{filter_articles, latest};
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::views::public::{
    active_filter, create_about_page, create_article_page, create_articles_page,
    create_contact_page, create_home_page, ContactView,
};

const HOME_LATEST: usize = 6;

pub async fn handle_home_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let entries = latest(state.content.list().await, HOME_LATEST);
    Html(create_home_page(&state.config, &entries).into_string())
}

pub async fn handle_articles_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<ArticleParams>,
) -> impl IntoResponse {
    let search = params.q.unwrap_or_default();
    let tag = active_filter(params.tag.as_deref()).to_string();

    let entries = filter_articles(state.content.list().await, &search, Some(tag.as_str()));
    Html(create_articles_page(&state.config, &entries, &search, &tag).into_string())
}

pub async fn handle_article_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    match state.content.get_by_slug(&slug).await {
        Some(entry) if entry.published => {
            Ok(Html(create_article_page(&state.config, &entry).into_string()))
        }
        _ => Err(AppError::NotFound(format!("article {slug:?}"))),
    }
}

pub async fn handle_about_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    Html(create_about_page(&state.config).into_string())
}

pub async fn handle_contact_request<S: KeyValueStore>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let input = ContactInput::default();
    let view = ContactView::Form {
        input: &input,
        error: None,
    };
    Html(create_contact_page(&state.config, view).into_string())
}

/// Accepts the contact form. Nothing is sent anywhere; the visitor just sees a confirmation.
pub async fn handle_contact_submit<S: KeyValueStore>(
    State(state): State<AppState<S>>,
    Form(input): Form<ContactInput>,
) -> Response {
    match input.validate() {
        Ok(()) => {
            tracing::info!("contact form submitted");
            Html(create_contact_page(&state.config, ContactView::Sent).into_string())
                .into_response()
        }
        Err(err) => {
            let view = ContactView::Form {
                input: &input,
                error: Some(err.to_string()),
            };
            (
                StatusCode::BAD_REQUEST,
                Html(create_contact_page(&state.config, view).into_string()),
            )
                .into_response()
        }
    }
}
