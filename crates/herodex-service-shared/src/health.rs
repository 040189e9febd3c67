//! Health and environment probe handlers.
//!
//! Provides `/health` and `/env` endpoints: plain-text probes with no error
//! paths beyond the router's generic handling.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::AppState;

/// Liveness probe handler.
///
/// Returns 200 OK with a status line naming the process id and the current
/// date. Does not depend on any state.
///
/// # Example
///
/// ```text
/// GET /health
/// HEALTH: SERVER INSTANCE IS HEALTHY WITH PROCESS ID 4242 on January 2, 2026
/// ```
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, status_line())
}

/// Environment probe handler.
///
/// Returns 200 OK naming the environment the service was configured with
/// (e.g. "development" or "production").
///
/// # Example
///
/// ```text
/// GET /env
/// THIS IS THE development ENVIRONMENT
/// ```
pub async fn environment(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        format!("THIS IS THE {} ENVIRONMENT", state.environment()),
    )
}

fn status_line() -> String {
    format!(
        "HEALTH: SERVER INSTANCE IS HEALTHY WITH PROCESS ID {} on {}",
        std::process::id(),
        chrono::Local::now().format("%B %-d, %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_names_this_process() {
        let line = status_line();

        assert!(line.starts_with("HEALTH: SERVER INSTANCE IS HEALTHY"));
        assert!(line.contains(&std::process::id().to_string()));
    }

    #[test]
    fn test_status_line_has_formatted_date() {
        let line = status_line();

        // "January 2, 2026" style: a month name, no zero-padded day.
        let date = line.split(" on ").nth(1).expect("date segment");
        assert!(date.contains(','));
        assert!(date.chars().next().unwrap().is_ascii_uppercase());
    }

    #[tokio::test]
    async fn test_environment_probe_body() {
        let state = AppState::new("test");
        let response = environment(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
