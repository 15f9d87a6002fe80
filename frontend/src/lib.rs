mod api;
mod components;

use components::form_section::render_form_section;
use components::handlers;
use components::header::{render_footer, render_header};
use components::results::render_results;
use shared::{ApiConfig, FieldValue, FormController, PredictError, PredictionResponse};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub use components::results::{PredictionSummary, PredictionSummaryProps};

// Yew msg components
pub enum Msg {
    UpdateField(String, FieldValue),
    Submit,
    PredictionFinished(Result<PredictionResponse, PredictError>),
    Reset,
    FillSample,
}

// Main component
pub struct Model {
    controller: FormController,
    config: ApiConfig,
    occupation_select: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ApiConfig::default();
        log::info!("Prediction endpoint: {}", config.predict_url());

        Self {
            controller: FormController::new(),
            config,
            occupation_select: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(name, value) => handlers::handle_update_field(self, &name, value),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionFinished(result) => handlers::handle_prediction_finished(self, result),
            Msg::Reset => handlers::handle_reset(self),
            Msg::FillSample => handlers::handle_fill_sample(self),
        }
    }

    // The select's value property must follow the model; option `selected`
    // attributes are ignored once the user has picked.
    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.occupation_select.cast::<HtmlSelectElement>() {
            select.set_value(self.controller.form().occupation.as_ref());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                { render_header() }

                <main class="content-grid">
                    { render_form_section(self, ctx) }
                    { render_results(self) }
                </main>

                { render_footer(&self.config) }
            </div>
        }
    }
}
