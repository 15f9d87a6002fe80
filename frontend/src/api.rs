use gloo_net::http::Request;
use shared::{PredictError, PredictionRequest, PredictionResponse};

/// Sends one prediction request and maps every failure into a [`PredictError`].
pub async fn request_prediction(
    url: &str,
    payload: &PredictionRequest,
) -> Result<PredictionResponse, PredictError> {
    let response = Request::post(url)
        .json(payload)
        .map_err(|e| PredictError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("Prediction rejected with status {}", status);
        return Err(PredictError::rejected(status, &body));
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| PredictError::Malformed(e.to_string()))
}
