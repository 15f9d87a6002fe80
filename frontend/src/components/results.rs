use super::super::Model;
use super::utils::{render_error_message, render_placeholder};
use shared::{PredictionResponse, ViewState};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    html! {
        <section class="card">
            <div class="card-header">
                <i class="fa-solid fa-chart-column icon"></i>
                <h2>{"Prediction Results"}</h2>
            </div>
            {
                match model.controller.view() {
                    ViewState::Placeholder => render_placeholder(),
                    ViewState::Error(message) => render_error_message(message),
                    ViewState::Result(response) => html! {
                        <PredictionSummary response={response.clone()} />
                    },
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PredictionSummaryProps {
    pub response: PredictionResponse,
}

/// Category badge, confidence meter and per-class probabilities.
#[function_component(PredictionSummary)]
pub fn prediction_summary(props: &PredictionSummaryProps) -> Html {
    let response = &props.response;

    html! {
        <div class="result-content">
            <div class="prediction-badge">
                <i class="fa-solid fa-trophy"></i>
                <span class="prediction-category">{ response.category.clone() }</span>
            </div>

            <div class="confidence-section">
                <div class="confidence-label">
                    <span>{"Confidence Score"}</span>
                    <span class="confidence-value">{ response.confidence_label() }</span>
                </div>
                <div class="confidence-bar">
                    <div
                        class="confidence-fill"
                        style={format!("width: {}%", response.confidence_width())}
                    ></div>
                </div>
            </div>

            <div class="probabilities-section">
                <h3>{"Class Probabilities"}</h3>
                { for response.probability_rows().into_iter().map(|(class_name, value)| html! {
                    <div class="probability-item" key={class_name.clone()}>
                        <span class="class-name">{ class_name }</span>
                        <span class="class-value">{ value }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
