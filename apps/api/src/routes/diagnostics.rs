//! Database diagnostic report. Never fails: every problem is reported in the body.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::db::{list_tables, DatabaseState};
use crate::state::AppState;

const MAX_LISTED_TABLES: i64 = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET /test
pub async fn database_diagnostic_handler(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: String::new(),
        database_url: set_marker(state.config.database_url.is_some()),
        database_name: set_marker(state.config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.database {
        DatabaseState::Disabled => {
            report.database =
                "❌ Database module not found (run enable-database first)".to_string();
        }
        DatabaseState::Failed(msg) => {
            report.database = format!("❌ Error: {}", truncate_chars(msg, MAX_ERROR_CHARS));
        }
        DatabaseState::Ready(pool) => {
            report.connection_status = "Connected".to_string();
            match list_tables(pool, MAX_LISTED_TABLES).await {
                Ok(tables) => {
                    report.database = "✅ Connected & Working".to_string();
                    report.collections = tables;
                }
                Err(e) => {
                    warn!("Diagnostic table listing failed: {e}");
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
                    );
                }
            }
        }
    }

    Json(report)
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ééééé", 2), "éé");
    }

    #[test]
    fn test_set_marker() {
        assert_eq!(set_marker(true), "✅ Set");
        assert_eq!(set_marker(false), "❌ Not Set");
    }
}
