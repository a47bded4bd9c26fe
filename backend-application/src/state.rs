use std::sync::Arc;

use backend_domain::ports::StatsRepository;
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub stats_repo: Arc<dyn StatsRepository>,
    pub metrics: Arc<Metrics>,
}
