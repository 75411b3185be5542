//! UI components for the chat client.
//!
//! - `app_shell`: Footer
//! - `layout`: Container, Center, Heading primitives the shell is built from

mod app_shell;
mod layout;

pub use app_shell::{Footer, FOOTER_PADDING, FOOTER_TAGLINE};
pub use layout::{Center, Container, Heading};
