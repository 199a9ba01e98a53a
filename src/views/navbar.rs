use dioxus::prelude::*;

use crate::data::{NAV_ANCHORS, PROFILE};
use crate::routes::Route;
use crate::utils::use_theme;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let toggle_theme = theme.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "sticky top-0 z-50 backdrop-blur border-b",
            div {
                class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                a {
                    href: "#home",
                    class: "font-semibold tracking-tight text-base sm:text-lg",
                    {PROFILE.name}
                }
                nav {
                    class: "hidden sm:flex items-center gap-6",
                    for (label, href) in NAV_ANCHORS.iter() {
                        a {
                            key: "{label}",
                            href: *href,
                            class: "text-sm opacity-80 hover:opacity-100",
                            {*label}
                        }
                    }
                    div { class: "h-5 w-px bg-neutral-300 dark:bg-neutral-700" }
                    button {
                        aria_label: "Toggle theme",
                        class: "p-2 rounded-xl border hover:shadow",
                        onclick: move |_| {
                            toggle_theme.toggle();
                        },
                        if theme.is_dark() {
                            "☀"
                        } else {
                            "☾"
                        }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
