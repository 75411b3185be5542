use dioxus::prelude::*;

use crate::tokens::Spacing;

/// Block container with uniform padding
#[component]
pub fn Container(padding: Spacing, children: Element) -> Element {
    let padding = padding.to_css();

    rsx! {
        div { class: "chat-box", style: "padding: {padding}", {children} }
    }
}

/// Centers its children on both axes
#[component]
pub fn Center(children: Element) -> Element {
    rsx! {
        div { class: "chat-center", {children} }
    }
}

/// Heading rendered as h2; `size` selects a `chat-heading--*` class
#[component]
pub fn Heading(size: &'static str, children: Element) -> Element {
    rsx! {
        h2 { class: "chat-heading chat-heading--{size}", {children} }
    }
}
