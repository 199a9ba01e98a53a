use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::SocialLinks;
use crate::data::PROFILE;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
            div {
                class: "flex flex-col sm:flex-row items-start sm:items-center justify-between gap-4",
                p { class: "text-sm opacity-70", "© {year} {PROFILE.name}. All rights reserved." }
                div { class: "flex items-center gap-3", SocialLinks {} }
            }
        }
    }
}
