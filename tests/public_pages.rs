//! Integration tests for the public pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, build_test_app, get, location, post_form};

use folio::content::ContentStore;
use folio::models::Entry;

#[tokio::test]
async fn home_lists_latest_bootstrap_articles() {
    let (app, _) = build_test_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Latest Articles"));
    assert!(html.contains("Holistic Branding Strategy"));
    assert!(html.contains(r#""@type":"Person""#));
}

#[tokio::test]
async fn articles_filter_by_tag_and_search() {
    let (app, _) = build_test_app();

    let html = body_text(get(&app, "/articles?tag=AI").await).await;
    assert!(html.contains("AI Agents in Search"));
    assert!(html.contains("The End of Ten Blue Links"));
    assert!(!html.contains("Holistic Branding Strategy"));

    let html = body_text(get(&app, "/articles?q=react").await).await;
    assert!(html.contains("Optimizing React for Core Web Vitals"));
    assert!(!html.contains("AI Agents in Search"));

    let html = body_text(get(&app, "/articles?q=nothing-matches-this").await).await;
    assert!(html.contains("No Articles Found"));
}

#[tokio::test]
async fn article_detail_by_slug() {
    let (app, _) = build_test_app();
    let response = get(&app, "/articles/future-semantic-search").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>The Future of Semantic Search</h1>"));
    assert!(html.contains("<h3>Key Takeaways</h3>"));
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let (app, _) = build_test_app();
    let response = get(&app, "/articles/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn drafts_are_hidden_from_public_pages() {
    let (app, store) = build_test_app();
    let content = ContentStore::new(store);

    let mut draft = Entry::draft();
    draft.title = "Secret Draft".into();
    draft.slug = "secret-draft".into();
    draft.content = "Not yet".into();
    draft.published = false;
    content.save(draft).await.unwrap();

    let response = get(&app, "/articles/secret-draft").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(get(&app, "/articles").await).await;
    assert!(!html.contains("Secret Draft"));
    let html = body_text(get(&app, "/").await).await;
    assert!(!html.contains("Secret Draft"));
}

#[tokio::test]
async fn contact_form_requires_fields_and_confirms() {
    let (app, _) = build_test_app();

    let response = post_form(&app, "/contact", "name=Ada&email=&message=hi").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("email is required"));

    let response = post_form(
        &app,
        "/contact",
        "name=Ada&email=ada%40example.com&message=Hello",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Message Sent!"));
}

#[tokio::test]
async fn legacy_paths_and_unknown_routes_redirect() {
    let (app, _) = build_test_app();

    let response = get(&app, "/blog").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/articles");

    let response = get(&app, "/research").await;
    assert_eq!(location(&response), "/about");

    let response = get(&app, "/no/such/page").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn about_page_renders() {
    let (app, _) = build_test_app();
    let response = get(&app, "/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("My Expertise"));
}
