// Keep-alive web endpoint.
//
// The hosting platform reaps processes that accept no inbound traffic, so
// an external uptime monitor pings this route. It runs on its own task and
// shares no state with the chat path.

use std::net::SocketAddr;

use axum::{routing::get, Router};

const GREETING: &str = "織蘿在這裡偷看你♡";

async fn index() -> &'static str {
    GREETING
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

/// Binds `0.0.0.0:<port>` and serves until the process exits. Failures are
/// logged rather than propagated; a dead keep-alive route must not take the
/// chat loop down with it.
pub async fn serve(port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind keep-alive endpoint on {addr}: {e}");
            return;
        }
    };

    tracing::info!("Keep-alive endpoint listening on {addr}");

    if let Err(e) = axum::serve(listener, router()).await {
        tracing::error!("Keep-alive server exited: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn index_returns_the_fixed_greeting() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, GREETING.as_bytes());
    }

    #[tokio::test]
    async fn other_paths_are_not_served() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
