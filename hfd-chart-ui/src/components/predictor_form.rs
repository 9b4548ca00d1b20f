//! Twelve-field patient form with a Predict button and result text.

use crate::state::{AppState, PredictorState};
use dioxus::prelude::*;
use hfd_model::{Feature, FeatureKind};
use hfd_records::Outcome;
use hfd_views::prediction_view;

/// Input row data, computed up front so the RSX loop only formats.
struct FieldSpec {
    feature: Feature,
    id: String,
    label: &'static str,
    min: String,
    max: String,
    /// Positive/negative labels for binary fields
    choices: Option<(&'static str, &'static str)>,
}

fn result_color(text: &str) -> &'static str {
    if text == Outcome::Death.as_str() {
        Outcome::Death.color()
    } else if text == Outcome::Survival.as_str() {
        Outcome::Survival.color()
    } else {
        "#666"
    }
}

/// Predictor card body. Numeric fields carry the dataset min/max as input
/// hints only; binary fields use a dropdown whose empty option means unset.
#[component]
pub fn PredictorForm() -> Element {
    let app = use_context::<AppState>();
    let mut predictor = use_context::<PredictorState>();
    let summary = app.summary.read().clone();

    let fields: Vec<FieldSpec> = Feature::ORDER
        .into_iter()
        .map(|feature| {
            let (bounds, choices) = match feature {
                Feature::Continuous(column) => (
                    summary.as_ref().and_then(|s| s.bounds(column)).cloned(),
                    None,
                ),
                Feature::Indicator(column) => (
                    None,
                    Some((column.positive_label(), column.negative_label())),
                ),
            };
            let hint = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
            FieldSpec {
                feature,
                id: format!("predict-{}", feature.name()),
                label: feature.display_name(),
                min: hint(bounds.as_ref().and_then(|b| b.min)),
                max: hint(bounds.as_ref().and_then(|b| b.max)),
                choices,
            }
        })
        .collect();
    let (numeric, binary): (Vec<FieldSpec>, Vec<FieldSpec>) = fields
        .into_iter()
        .partition(|f| f.feature.kind() == FeatureKind::Numeric);

    let on_predict = move |_: Event<MouseData>| {
        let form = (predictor.form)();
        let text = prediction_view(&form, predictor.classifier.read().as_ref());
        predictor.result.set(Some(text));
    };

    let result = (predictor.result)();
    let result_style = format!(
        "color: {}; font-weight: bold;",
        result.as_deref().map(result_color).unwrap_or("#666")
    );

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 8px 16px;",
            for field in numeric {
                div {
                    key: "{field.id}",
                    label {
                        r#for: "{field.id}",
                        style: "display: block; font-size: 13px; font-weight: bold;",
                        "{field.label}"
                    }
                    input {
                        id: "{field.id}",
                        r#type: "number",
                        step: "any",
                        min: "{field.min}",
                        max: "{field.max}",
                        placeholder: "{field.label}",
                        style: "width: 100%;",
                        oninput: move |evt: Event<FormData>| {
                            predictor.form.write().set_text(field.feature, &evt.value());
                        },
                    }
                }
            }
            for field in binary {
                div {
                    key: "{field.id}",
                    label {
                        r#for: "{field.id}",
                        style: "display: block; font-size: 13px; font-weight: bold;",
                        "{field.label}"
                    }
                    select {
                        id: "{field.id}",
                        style: "width: 100%;",
                        onchange: move |evt: Event<FormData>| {
                            predictor.form.write().set_text(field.feature, &evt.value());
                        },
                        option { value: "", "Select..." }
                        if let Some((yes, no)) = field.choices {
                            option { value: "1", "{yes}" }
                            option { value: "0", "{no}" }
                        }
                    }
                }
            }
        }
        button {
            style: "margin-top: 12px; padding: 6px 20px; font-weight: bold;",
            onclick: on_predict,
            "Predict"
        }
        div {
            id: "prediction-output",
            style: "margin-top: 12px; font-size: 18px; min-height: 24px;",
            if let Some(text) = result {
                span {
                    style: "{result_style}",
                    "{text}"
                }
            }
        }
    }
}
