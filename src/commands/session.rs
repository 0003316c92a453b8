use crate::app_system::DashboardSystem;
use crate::location::Location;

/// State that outlives a single command: the running system (and so its
/// caches) plus the current location.
pub struct Session {
    pub system: DashboardSystem,
    pub location: Location,
}

impl Session {
    pub fn new(system: DashboardSystem) -> Self {
        Self { system, location: Location::root() }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        self.system.shutdown().await
    }
}
