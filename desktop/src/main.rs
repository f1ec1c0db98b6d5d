#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css).

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialises once");

    // Phone-sized window so the dashboard renders at its design width.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Folio Pulse – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(430.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialises once");
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific wrapper which allows us to use the desktop-specific
/// `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        main { class: "app-shell",
            Outlet::<Route> {}
        }
    }
}
