use axum::response::Html;

static INDEX_HTML: &str = include_str!("../web/index.html");

/// Catch-all fallback: every unmatched GET serves the booking page, so deep
/// links into the single-page app resolve.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
