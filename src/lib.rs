//! Chat client footer.
//!
//! A static footer rendered by Dioxus: a padded container holding a
//! centered, small heading with the chat tagline.
//!
//! # Examples
//!
//! ```ignore
//! use chat_footer::components::Footer;
//! use dioxus::prelude::*;
//!
//! #[component]
//! fn Page() -> Element {
//!     rsx! { Footer {} }
//! }
//! ```

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod tokens;
