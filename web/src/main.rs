use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialises once");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// Web wrapper around the shared pages.
#[component]
fn WebShell() -> Element {
    rsx! {
        main { class: "app-shell",
            Outlet::<Route> {}
        }
    }
}
