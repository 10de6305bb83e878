//! Dashboard Page
//!
//! - GET / - The dashboard HTML page

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
