use std::sync::Arc;

use tokio::sync::RwLock;

use rouser_core::context::AppConfig;
use rouser_core::monitor::ActivityMonitor;
use rouser_core::wol::WakeTrigger;

/// Shared CLI state: the loaded configuration plus one engine instance,
/// passed around by handle rather than living in a global.
pub struct AppState {
    pub config: RwLock<AppConfig>,
    pub trigger: Arc<WakeTrigger>,
    pub monitor: ActivityMonitor,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        let trigger = Arc::new(WakeTrigger::new());
        let monitor = ActivityMonitor::new(Arc::clone(&trigger));
        Self {
            config: RwLock::new(AppConfig::load()),
            trigger,
            monitor,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
