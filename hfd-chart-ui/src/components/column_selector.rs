//! Dropdown selector over the seven continuous columns.

use crate::state::AppState;
use dioxus::prelude::*;
use hfd_records::ContinuousColumn;

/// Which `AppState` signal a [`ColumnSelector`] drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTarget {
    Distribution,
    ScatterX,
    ScatterY,
}

#[derive(Props, Clone, PartialEq)]
pub struct ColumnSelectorProps {
    /// DOM id of the `<select>`
    pub id: String,
    pub label: String,
    pub target: ColumnTarget,
}

/// Continuous column dropdown. Options show display names; the selected
/// value is written back to the targeted signal.
#[component]
pub fn ColumnSelector(props: ColumnSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let mut column = match props.target {
        ColumnTarget::Distribution => state.distribution_column,
        ColumnTarget::ScatterX => state.scatter_x,
        ColumnTarget::ScatterY => state.scatter_y,
    };
    let selected = column();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<ContinuousColumn>() {
        Ok(choice) => column.set(choice),
        Err(e) => log::warn!("[HFD] ignoring column selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                onchange: on_change,
                for option_column in ContinuousColumn::ALL {
                    option {
                        value: option_column.key(),
                        selected: option_column == selected,
                        "{option_column}"
                    }
                }
            }
        }
    }
}
