use crate::logger;
use crate::page;
use crate::response;
use crate::state::{AppState, Variant};
use chrono::Local;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Check HTTP method and return early response if not GET/HEAD
/// Returns Some(response) for OPTIONS/405, None to continue processing
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(response::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(response::build_405_response())
        }
    }
}

/// Serve the dashboard page for `GET /`.
///
/// Generic over the request body: the handler never reads it, which also
/// keeps it directly testable without a live connection.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Single route: everything but the root path is a 404
    if path != "/" {
        return Ok(response::build_404_response());
    }

    let html = match state.variant {
        Variant::Static => page::static_page().to_string(),
        Variant::Live => {
            let visits = state.record_visit();
            page::render_live(&state.hostname, visits, &Local::now())
        }
    };

    if access_log {
        logger::log_response(html.len());
    }

    Ok(response::build_html_response(html, &state.config.http, is_head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn live_state() -> Arc<AppState> {
        Arc::new(AppState::new(&Config::test_default(), Variant::Live))
    }

    fn static_state() -> Arc<AppState> {
        Arc::new(AppState::new(&Config::test_default(), Variant::Static))
    }

    fn get(path: &str) -> Request<()> {
        Request::builder().method(Method::GET).uri(path).body(()).unwrap()
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_live_visits_count_up_per_request() {
        let state = live_state();

        let first = handle_request(get("/"), Arc::clone(&state)).await.unwrap();
        assert_eq!(first.status(), 200);
        assert!(body_string(first).await.contains("Visitors: 1"));

        let second = handle_request(get("/"), Arc::clone(&state)).await.unwrap();
        assert!(body_string(second).await.contains("Visitors: 2"));
    }

    #[tokio::test]
    async fn test_live_page_reports_state_hostname() {
        let state = live_state();
        let expected = format!("Hostname: {}", state.hostname);
        let resp = handle_request(get("/"), state).await.unwrap();
        assert!(body_string(resp).await.contains(&expected));
    }

    #[tokio::test]
    async fn test_static_body_is_identical_across_requests() {
        let state = static_state();
        let first = handle_request(get("/"), Arc::clone(&state)).await.unwrap();
        let second = handle_request(get("/"), Arc::clone(&state)).await.unwrap();
        assert_eq!(body_string(first).await, body_string(second).await);
        // The static variant never touches the counter
        assert_eq!(state.visit_count(), 0);
    }

    #[tokio::test]
    async fn test_non_root_path_is_404() {
        let state = live_state();
        let resp = handle_request(get("/build/7"), Arc::clone(&state)).await.unwrap();
        assert_eq!(resp.status(), 404);
        // A missed route must not count as a visit
        assert_eq!(state.visit_count(), 0);
    }

    #[tokio::test]
    async fn test_post_is_405() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(())
            .unwrap();
        let resp = handle_request(req, live_state()).await.unwrap();
        assert_eq!(resp.status(), 405);
    }

    #[tokio::test]
    async fn test_head_returns_empty_body_with_headers() {
        let req = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(())
            .unwrap();
        let resp = handle_request(req, live_state()).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(body_string(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .body(())
            .unwrap();
        let resp = handle_request(req, live_state()).await.unwrap();
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
    }
}
