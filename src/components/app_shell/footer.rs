use dioxus::prelude::*;

use crate::components::{Center, Container, Heading};
use crate::tokens::Spacing;

/// Tagline shown in the footer heading
pub const FOOTER_TAGLINE: &str = "chat as much as you want";

/// Padding around the footer content
pub const FOOTER_PADDING: Spacing = Spacing(8);

/// Footer with the chat tagline
#[component]
pub fn Footer() -> Element {
    rsx! {
        Container { padding: FOOTER_PADDING,
            Center {
                Heading { size: "sm", "{FOOTER_TAGLINE}" }
            }
        }
    }
}
