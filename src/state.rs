use std::sync::Arc;

use crate::{catalog::Catalog, config::Config, fault::FaultInjector, load::LoadGenerator};

/// Per-process state shared by every request. Nothing in it is mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub load: LoadGenerator,
    pub faults: FaultInjector,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            load: LoadGenerator::default(),
            faults: FaultInjector::default(),
        }
    }

    pub fn from_config(catalog: Catalog, cfg: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            load: LoadGenerator::new(cfg.load.max_burn()),
            faults: FaultInjector::new(cfg.fault.fail_even_ids),
        }
    }

    pub fn with_faults(mut self, faults: FaultInjector) -> Self {
        self.faults = faults;
        self
    }

    pub fn with_load(mut self, load: LoadGenerator) -> Self {
        self.load = load;
        self
    }
}
