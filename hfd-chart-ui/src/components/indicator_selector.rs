//! Dropdown selector over the five binary indicator columns.

use crate::state::AppState;
use dioxus::prelude::*;
use hfd_records::IndicatorColumn;

/// Indicator dropdown driving the breakdown pie.
#[component]
pub fn IndicatorSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.breakdown_column)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(choice) = evt.value().parse::<IndicatorColumn>() {
            state.breakdown_column.set(choice);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "breakdown-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select a categorical variable: "
            }
            select {
                id: "breakdown-select",
                onchange: on_change,
                for indicator in IndicatorColumn::ALL {
                    option {
                        value: indicator.key(),
                        selected: indicator == selected,
                        "{indicator}"
                    }
                }
            }
        }
    }
}
