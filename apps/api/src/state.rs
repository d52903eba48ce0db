use crate::config::Config;
use crate::db::DatabaseState;
use crate::explain::rules::SimplifierRules;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Only read by the diagnostic endpoint.
    pub database: DatabaseState,
    /// Tables used by the explainer. Production uses `DEFAULT_RULES`.
    pub rules: SimplifierRules<'static>,
}
