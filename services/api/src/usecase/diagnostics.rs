use crate::config::StoreEnvFlags;
use crate::domain::repository::StoreProbe;
use crate::error::ApiError;

/// Number of collection names reported by diagnostics.
pub const MAX_LISTED_COLLECTIONS: usize = 10;
/// Longest store error excerpt reported by diagnostics, in characters.
pub const MAX_ERROR_EXCERPT: usize = 50;

/// Outcome of listing collections on the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    NotAvailable,
    Working,
    /// Configured, but the store answered with an error.
    Failing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDiagnostics {
    pub health: StoreHealth,
    pub env: StoreEnvFlags,
    pub connected: bool,
    pub collections: Vec<String>,
}

// ── DiagnoseStore ────────────────────────────────────────────────────────────

pub struct DiagnoseStoreUseCase<P: StoreProbe> {
    pub probe: P,
    pub env: StoreEnvFlags,
}

impl<P: StoreProbe> DiagnoseStoreUseCase<P> {
    /// Never fails: store errors are reported in the result.
    pub async fn execute(&self) -> StoreDiagnostics {
        let mut report = StoreDiagnostics {
            health: StoreHealth::NotAvailable,
            env: self.env,
            connected: self.probe.is_configured(),
            collections: Vec::new(),
        };
        if !report.connected {
            return report;
        }

        match self.probe.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                report.collections = names;
                report.health = StoreHealth::Working;
            }
            Err(e) => {
                tracing::warn!(error = %error_detail(&e), "store diagnostics failed");
                report.health = StoreHealth::Failing(excerpt(&error_detail(&e)));
            }
        }
        report
    }
}

// ── CheckReadiness ───────────────────────────────────────────────────────────

pub struct CheckReadinessUseCase<P: StoreProbe> {
    pub probe: P,
}

impl<P: StoreProbe> CheckReadinessUseCase<P> {
    /// Ready when no store is configured, or when the configured one answers
    /// a ping.
    pub async fn execute(&self) -> bool {
        if !self.probe.is_configured() {
            return true;
        }
        match self.probe.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %error_detail(&e), "store ping failed");
                false
            }
        }
    }
}

fn error_detail(error: &ApiError) -> String {
    match error {
        ApiError::Internal(cause) => format!("{cause:#}"),
        other => other.to_string(),
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(MAX_ERROR_EXCERPT).collect()
}
