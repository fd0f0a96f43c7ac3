use crate::client::SurveillanceClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub client: SurveillanceClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            client: SurveillanceClient::new(config),
        }
    }
}
