use std::ops::Deref;
use std::sync::Arc;

use wallet::config::GateConfig;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: GateConfig,
}

/// Immutable app-wide state, provided once as a Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: GateConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
