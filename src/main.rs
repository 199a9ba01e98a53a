use dioxus::prelude::*;
use portfolio::{ init_logging, use_theme_provider, Route };
use portfolio::data::PROFILE;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    init_logging();
    log::info!("Launching portfolio for {}", PROFILE.name);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_theme_provider();

    rsx! {
        document::Title { "{PROFILE.name} · Portfolio" }
        document::Meta { name: "description", content: "{PROFILE.bio}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: if theme.is_dark() { "dark" } else { "" },
            div {
                class: "min-h-screen bg-white text-black dark:bg-neutral-950 dark:text-white",
                Router::<Route> {}
            }
        }
    }
}
