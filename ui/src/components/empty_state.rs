// File: src/components/empty_state.rs
use dioxus::prelude::*;

/// Centered full-height panel used for the gate's non-connected screens.
#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    primary_action: Option<Element>,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                min-height: 80vh;
                padding: 2rem;
                text-align: center;
            ",

            h2 {
                style: "margin-bottom: 1rem;",
                "{props.title}"
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
            }
        }
    }
}
