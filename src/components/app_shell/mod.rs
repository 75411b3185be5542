//! App shell components: Footer
//!
//! These components form the persistent UI frame around the page content.

mod footer;

pub use footer::{Footer, FOOTER_PADDING, FOOTER_TAGLINE};
