use std::sync::Arc;

use crate::upstream::CardSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CardSource>,
}
