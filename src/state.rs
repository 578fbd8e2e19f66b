use crate::config::Config;
use std::sync::atomic::{AtomicU64, Ordering};

/// Version string rendered on the live page. Fixed at process start.
pub const VERSION: &str = "v2.0";

/// Which page a server instance renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Fixed page, identical bytes on every request.
    Static,
    /// Page with visit counter, hostname and timestamp.
    Live,
}

pub struct AppState {
    pub config: Config,
    pub variant: Variant,
    pub hostname: String,
    visits: AtomicU64,
}

impl AppState {
    pub fn new(config: &Config, variant: Variant) -> Self {
        Self {
            config: config.clone(),
            variant,
            hostname: lookup_hostname(),
            visits: AtomicU64::new(0),
        }
    }

    /// Increment the visit counter and return the new total.
    ///
    /// The increment is atomic: the runtime handles requests concurrently and
    /// a plain read-modify-write would drop counts under load.
    pub fn record_visit(&self) -> u64 {
        self.visits.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn visit_count(&self) -> u64 {
        self.visits.load(Ordering::SeqCst)
    }
}

/// Read the machine hostname once at startup.
///
/// A failed lookup or a non-UTF-8 name falls back to a placeholder instead of
/// failing the request path.
fn lookup_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
