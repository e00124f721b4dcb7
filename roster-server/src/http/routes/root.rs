//! Greeting at `/`

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET /
async fn index() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello world",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_says_hello() {
        let Json(body) = index().await;
        assert_eq!(body.message, "Hello world");
    }
}
