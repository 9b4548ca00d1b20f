//! Bordered card used to lay out the dashboard sections.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Card heading
    pub title: String,
    pub children: Element,
}

/// A titled, bordered section of the dashboard page.
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        section {
            style: "border: 1px solid #DDD; border-radius: 6px; padding: 12px 16px; margin: 12px 0; background: #FFF;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
