use dioxus::prelude::*;

use crate::data::PROFILE;

#[component]
pub fn SocialLinks(#[props(default)] class: &'static str) -> Element {
    rsx! {
        for social in PROFILE.socials.iter() {
            a {
                key: "{social.label}",
                href: social.href,
                target: "_blank",
                rel: "noreferrer",
                class: "inline-flex items-center gap-2 px-3 py-2 rounded-xl border hover:shadow text-sm {class}",
                span { class: "social-icon", aria_hidden: "true", {social.icon.glyph()} }
                span { class: "hidden sm:inline", {social.label} }
            }
        }
    }
}
