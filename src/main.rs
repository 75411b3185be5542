use chat_footer::components::Footer;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/chat.css");

/// Platform the footer is launched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Desktop,
    Mobile,
    Web,
}

/// Desktop wins over mobile, mobile over web, so a build with the default
/// `web` feature plus `desktop` launches exactly once.
fn launch_platform() -> Option<Platform> {
    if cfg!(feature = "desktop") {
        Some(Platform::Desktop)
    } else if cfg!(feature = "mobile") {
        Some(Platform::Mobile)
    } else if cfg!(feature = "web") {
        Some(Platform::Web)
    } else {
        None
    }
}

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    let platform = launch_platform();
    tracing::info!(?platform, "Mounting chat footer");

    match platform {
        #[cfg(feature = "desktop")]
        Some(Platform::Desktop) => {
            use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

            let config = Config::default().with_window(
                WindowBuilder::new()
                    .with_title("Chat")
                    .with_resizable(true)
                    .with_inner_size(LogicalSize::new(800.0, 200.0)),
            );

            dioxus::LaunchBuilder::desktop()
                .with_cfg(config)
                .launch(App);
        }
        #[cfg(feature = "mobile")]
        Some(Platform::Mobile) => dioxus::LaunchBuilder::mobile().launch(App),
        #[cfg(feature = "web")]
        Some(Platform::Web) => dioxus::launch(App),
        _ => tracing::error!("No launch platform enabled, build with the web, desktop or mobile feature"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! does not resolve on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/chat.css")} }
        }

        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "desktop")]
    fn test_desktop_takes_precedence() {
        assert_eq!(launch_platform(), Some(Platform::Desktop));
    }

    #[test]
    #[cfg(all(feature = "mobile", not(feature = "desktop")))]
    fn test_mobile_takes_precedence_over_web() {
        assert_eq!(launch_platform(), Some(Platform::Mobile));
    }

    #[test]
    #[cfg(all(feature = "web", not(feature = "desktop"), not(feature = "mobile")))]
    fn test_default_launches_web() {
        assert_eq!(launch_platform(), Some(Platform::Web));
    }

    #[test]
    fn test_single_platform_selected() {
        let any_feature = cfg!(any(feature = "web", feature = "desktop", feature = "mobile"));
        assert_eq!(launch_platform().is_some(), any_feature);
    }
}
