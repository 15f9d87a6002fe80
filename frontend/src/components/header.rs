use shared::ApiConfig;
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="header">
            <h1><i class="fa-solid fa-hospital"></i> {" Insurance Premium Predictor"}</h1>
            <p class="subtitle">{"Enter your details to predict insurance premium category"}</p>
        </header>
    }
}

pub fn render_footer(config: &ApiConfig) -> Html {
    html! {
        <footer class="api-status">
            <span class="status-dot"></span>
            <span>{ format!("API Endpoint: {}", config.predict_url()) }</span>
        </footer>
    }
}
