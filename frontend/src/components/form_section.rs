use super::super::Model;
use super::super::Msg;
use shared::{Field, FieldValue, Occupation, SAMPLE_CITIES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

struct NumberInput {
    field: Field,
    icon: &'static str,
    label: &'static str,
    placeholder: &'static str,
    min: &'static str,
    max: Option<&'static str>,
    step: &'static str,
}

static NUMBER_INPUTS: [NumberInput; 4] = [
    NumberInput {
        field: Field::Age,
        icon: "fa-cake-candles",
        label: "Age (years)",
        placeholder: "e.g., 32",
        min: "1",
        max: Some("119"),
        step: "1",
    },
    NumberInput {
        field: Field::Weight,
        icon: "fa-weight-scale",
        label: "Weight (kg)",
        placeholder: "e.g., 75",
        min: "1",
        max: None,
        step: "0.1",
    },
    NumberInput {
        field: Field::Height,
        icon: "fa-ruler-vertical",
        label: "Height (meters)",
        placeholder: "e.g., 1.75",
        min: "0.1",
        max: Some("2.5"),
        step: "0.01",
    },
    NumberInput {
        field: Field::IncomeLpa,
        icon: "fa-indian-rupee-sign",
        label: "Income (LPA)",
        placeholder: "e.g., 12",
        min: "0.1",
        max: None,
        step: "0.1",
    },
];

pub fn render_form_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let loading = model.controller.is_loading();

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="card">
            <div class="card-header">
                <i class="fa-solid fa-pen-to-square icon"></i>
                <h2>{"Input Parameters"}</h2>
            </div>

            <form onsubmit={on_submit}>
                <div class="form-grid">
                    { for NUMBER_INPUTS.iter().map(|input| render_number_input(model, link, input)) }
                    { render_city_input(model, link) }
                    { render_occupation_select(model, link) }
                    { render_smoker_checkbox(model, link) }
                </div>

                <div class="button-group">
                    <button id="predict-button" type="submit" class="btn btn-primary" disabled={loading}>
                        {
                            if loading {
                                html! { <><span class="spinner"></span>{" Predicting..."}</> }
                            } else {
                                html! { <><i class="fa-solid fa-wand-magic-sparkles"></i>{" Predict Premium"}</> }
                            }
                        }
                    </button>
                    <button
                        id="reset-button"
                        type="button"
                        class="btn btn-secondary"
                        onclick={link.callback(|_| Msg::Reset)}
                    >
                        <i class="fa-solid fa-rotate-left"></i>{" Reset"}
                    </button>
                    <button
                        id="sample-button"
                        type="button"
                        class="btn btn-secondary"
                        onclick={link.callback(|_| Msg::FillSample)}
                    >
                        <i class="fa-solid fa-clipboard-list"></i>{" Sample Data"}
                    </button>
                </div>
            </form>
        </section>
    }
}

fn text_callback(link: &Scope<Model>) -> Callback<InputEvent> {
    link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(input.name(), FieldValue::Text(input.value()))
    })
}

fn render_number_input(model: &Model, link: &Scope<Model>, input: &NumberInput) -> Html {
    let form = model.controller.form();

    html! {
        <div class="form-group">
            <label for={input.field.to_string()}>
                <i class={classes!("fa-solid", input.icon, "label-icon")}></i>
                { input.label }
            </label>
            <input
                type="number"
                id={input.field.to_string()}
                name={input.field.to_string()}
                value={form.number_text(input.field).unwrap_or_default().to_string()}
                oninput={text_callback(link)}
                placeholder={input.placeholder}
                min={input.min}
                max={input.max}
                step={input.step}
                required=true
            />
        </div>
    }
}

fn render_city_input(model: &Model, link: &Scope<Model>) -> Html {
    html! {
        <div class="form-group">
            <label for="city">
                <i class="fa-solid fa-city label-icon"></i>
                {"City"}
            </label>
            <input
                type="text"
                id="city"
                name="city"
                value={model.controller.form().city.clone()}
                oninput={text_callback(link)}
                placeholder="e.g., Mumbai"
                list="cities-list"
                required=true
            />
            <datalist id="cities-list">
                { for SAMPLE_CITIES.iter().map(|city| html! { <option key={*city} value={*city} /> }) }
            </datalist>
        </div>
    }
}

fn render_occupation_select(model: &Model, link: &Scope<Model>) -> Html {
    let current = model.controller.form().occupation;
    let on_change = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateField(select.name(), FieldValue::Text(select.value()))
    });

    html! {
        <div class="form-group">
            <label for="occupation">
                <i class="fa-solid fa-briefcase label-icon"></i>
                {"Occupation"}
            </label>
            <select
                id="occupation"
                name="occupation"
                ref={model.occupation_select.clone()}
                onchange={on_change}
                required=true
            >
                { for Occupation::all().map(|occupation| html! {
                    <option
                        key={occupation.to_string()}
                        value={occupation.to_string()}
                        selected={occupation == current}
                    >
                        { occupation.label() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn render_smoker_checkbox(model: &Model, link: &Scope<Model>) -> Html {
    let on_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(input.name(), FieldValue::Checked(input.checked()))
    });

    html! {
        <div class="form-group full-width">
            <label>
                <i class="fa-solid fa-smoking label-icon"></i>
                {"Lifestyle"}
            </label>
            <label class="checkbox-wrapper">
                <input
                    type="checkbox"
                    name="smoker"
                    checked={model.controller.form().smoker}
                    onchange={on_change}
                />
                <span>{"I am a smoker"}</span>
            </label>
        </div>
    }
}
