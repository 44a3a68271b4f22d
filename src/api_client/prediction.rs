use serde::Deserialize;
use serde_json::Value;

use crate::api_client;
use crate::settings;
use crate::state::PassengerAttributes;

/// Success payload of the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Upstream sends this as a string like "72.3%", but the type is not
    /// enforced; numbers are accepted too.
    pub percentage_survival: Value,
}

impl PredictionResponse {
    /// The probability as it should be displayed: strings verbatim,
    /// anything else via its JSON text.
    pub fn display_value(&self) -> String {
        match &self.percentage_survival {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// POST the current passenger record to the configured prediction
/// endpoint and return its survival probability payload.
pub async fn predict(passenger: &PassengerAttributes) -> Result<PredictionResponse, String> {
    let url = settings::get_settings().predict_url;
    log::trace!("Requesting survival prediction from {}", url);

    let result = api_client::post::<PredictionResponse, _>(&url, passenger).await;

    match &result {
        Ok(response) => log::info!("Prediction received: {}", response.display_value()),
        Err(e) => log::error!("Prediction request failed: {}", e),
    }

    result
}
