//! Router shared by the binary and the integration tests.

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{admin, public};
use crate::state::AppState;
use crate::storage::KeyValueStore;

pub fn setup_router<S: KeyValueStore + 'static>(state: AppState<S>) -> Router {
    // Routes above the layer need a signed-in session, the ones below do not.
    let admin_routes = Router::new()
        .route("/dashboard", get(admin::handle_dashboard_request::<S>))
        .route("/new", get(admin::handle_new_entry_request::<S>))
        .route("/edit/:id", get(admin::handle_edit_entry_request::<S>))
        .route("/save", post(admin::handle_save_request::<S>))
        .route("/delete/:id", post(admin::handle_delete_request::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_session::<S>,
        ))
        .route(
            "/",
            get(admin::handle_login_page::<S>).post(admin::handle_login_request::<S>),
        )
        .route("/logout", post(admin::handle_logout_request::<S>));

    Router::new()
        .route("/", get(public::handle_home_request::<S>))
        .route("/articles", get(public::handle_articles_request::<S>))
        .route("/articles/:slug", get(public::handle_article_request::<S>))
        .route("/about", get(public::handle_about_request::<S>))
        .route(
            "/contact",
            get(public::handle_contact_request::<S>).post(public::handle_contact_submit::<S>),
        )
        .route("/blog", get(|| async { Redirect::permanent("/articles") }))
        .route("/research", get(|| async { Redirect::permanent("/about") }))
        .nest("/admin", admin_routes)
        .fallback(|| async { Redirect::to("/") })
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
