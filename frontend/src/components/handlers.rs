use super::super::Model;
use super::super::Msg;
use crate::api::request_prediction;
use shared::{FieldValue, PredictError, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_update_field(model: &mut Model, name: &str, value: FieldValue) -> bool {
    match model.controller.update_field(name, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Ignoring form update: {}", e);
            false
        }
    }
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.controller.is_loading() {
        return false;
    }

    let Some(payload) = model.controller.begin_submit() else {
        // Coercion failed; the controller already holds the error.
        return true;
    };

    log::info!(
        "Requesting prediction: age={} city={} occupation={}",
        payload.age,
        payload.city,
        payload.occupation
    );

    let url = model.config.predict_url();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = request_prediction(&url, &payload).await;
        link.send_message(Msg::PredictionFinished(result));
    });

    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    result: Result<PredictionResponse, PredictError>,
) -> bool {
    match &result {
        Ok(response) => log::info!(
            "Predicted category {} ({})",
            response.category,
            response.confidence_label()
        ),
        Err(e) => log::error!("Prediction failed: {}", e),
    }
    model.controller.finish(result);
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.controller.reset();
    true
}

pub fn handle_fill_sample(model: &mut Model) -> bool {
    model.controller.fill_sample();
    true
}
