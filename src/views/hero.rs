use dioxus::prelude::*;

use crate::components::{Reveal, SocialLinks};
use crate::configs::contact_email;
use crate::data::PROFILE;

#[component]
pub fn Hero() -> Element {
    let email = contact_email();

    rsx! {
        section {
            id: "home",
            class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 pt-16 pb-10",
            div {
                class: "grid md:grid-cols-2 gap-8 items-center",
                Reveal {
                    p { class: "text-sm uppercase tracking-[0.25em] mb-3 opacity-60", "Portfolio" }
                    h1 {
                        class: "text-3xl sm:text-4xl lg:text-5xl font-semibold tracking-tight leading-tight",
                        {PROFILE.title}
                    }
                    p { class: "mt-4 text-base sm:text-lg opacity-90 max-w-prose", {PROFILE.bio} }
                    div {
                        class: "mt-6 flex flex-wrap items-center gap-3",
                        a {
                            href: PROFILE.resume_url,
                            class: "px-4 py-2 rounded-xl border hover:shadow text-sm",
                            "Download Résumé"
                        }
                        a {
                            href: "mailto:{email}",
                            class: "px-4 py-2 rounded-xl bg-black text-white dark:bg-white dark:text-black hover:shadow text-sm",
                            "Contact Me"
                        }
                        SocialLinks { class: "ml-1" }
                    }
                }
                Reveal {
                    delay_ms: 50,
                    class: "md:justify-self-end",
                    div {
                        class: "aspect-square w-full max-w-sm rounded-3xl border overflow-hidden shadow-sm",
                        div { class: "h-full w-full avatar-gradient" }
                    }
                    p { class: "mt-3 text-sm opacity-70", {PROFILE.location} }
                }
            }
        }
    }
}
