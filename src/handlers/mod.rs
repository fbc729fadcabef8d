pub mod clients;
pub mod common;
pub mod health;
pub mod masters;
pub mod materials;
pub mod merchandiser;
pub mod operations;
pub mod samples;
pub mod styles;

use crate::db::DataStores;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub style_catalog: Arc<crate::services::styles::StyleCatalogService>,
    pub material_ledger: Arc<crate::services::materials::MaterialLedgerService>,
    pub sample_lifecycle: Arc<crate::services::samples::SampleLifecycleService>,
    pub timing: Arc<crate::services::timing::TimingService>,
    pub planning: Arc<crate::services::planning::PlanningService>,
    pub master_data: Arc<crate::services::masters::MasterDataService>,
    pub client_directory: Arc<crate::services::clients::ClientDirectoryService>,
}

impl AppServices {
    /// Wires every service onto the store pools it operates over.
    pub fn new(stores: &DataStores) -> Self {
        Self {
            style_catalog: Arc::new(crate::services::styles::StyleCatalogService::new(
                stores.samples.clone(),
            )),
            material_ledger: Arc::new(crate::services::materials::MaterialLedgerService::new(
                stores.samples.clone(),
            )),
            sample_lifecycle: Arc::new(crate::services::samples::SampleLifecycleService::new(
                stores.samples.clone(),
                stores.clients.clone(),
            )),
            timing: Arc::new(crate::services::timing::TimingService::new(
                stores.samples.clone(),
            )),
            planning: Arc::new(crate::services::planning::PlanningService::new(
                stores.samples.clone(),
            )),
            master_data: Arc::new(crate::services::masters::MasterDataService::new(
                stores.samples.clone(),
            )),
            client_directory: Arc::new(crate::services::clients::ClientDirectoryService::new(
                stores.clients.clone(),
            )),
        }
    }
}
