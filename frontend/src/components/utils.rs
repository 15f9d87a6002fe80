use yew::prelude::*;

pub fn render_error_message(message: &str) -> Html {
    html! {
        <div class="error-message">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p class="error-text">{ message }</p>
        </div>
    }
}

pub fn render_placeholder() -> Html {
    html! {
        <div class="results-placeholder">
            <i class="fa-solid fa-bullseye placeholder-icon"></i>
            <p>{"Fill in the form and click \"Predict Premium\" to see results here"}</p>
        </div>
    }
}
