use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
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
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn MobileShell() -> Element {
    rsx! {
        main { class: "app-shell app-shell--mobile",
            Outlet::<Route> {}
        }
    }
}
