// src/api/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Client,
    in_flight: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.solve_timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
            // One permit: at most one model request in flight at a time.
            in_flight: Arc::new(Semaphore::new(1)),
        })
    }

    /// Claims the single solve slot. Returns `None` while another submission
    /// is unresolved; dropping the permit frees the slot.
    pub fn begin_solve(&self) -> Option<OwnedSemaphorePermit> {
        self.in_flight.clone().try_acquire_owned().ok()
    }
}
