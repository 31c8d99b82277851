//! Embedded landing page.
//!
//! The page and its script are compiled into the binary so the service runs
//! from any working directory.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

/// Route at which the page script is served.
pub const SCRIPT_PATH: &str = "/static/main.js";

const INDEX_HTML: &str = include_str!("../../static/index.html");
const MAIN_JS: &str = include_str!("../../static/main.js");

/// `GET /` — directory form that posts to `/generate`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /static/main.js`
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
