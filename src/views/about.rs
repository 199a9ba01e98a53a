use dioxus::prelude::*;

use crate::components::{Reveal, Section};
use crate::data::{ABOUT, HIGHLIGHTS};

#[component]
pub fn About() -> Element {
    rsx! {
        Section {
            id: "about",
            title: "About",
            div {
                class: "grid md:grid-cols-3 gap-8",
                Reveal {
                    class: "md:col-span-2",
                    p { class: "opacity-90 leading-relaxed", {ABOUT} }
                }
                Reveal {
                    delay_ms: 50,
                    class: "card-muted border rounded-2xl p-5",
                    h3 { class: "font-medium mb-3", "Highlights" }
                    ul {
                        class: "space-y-2 text-sm opacity-90 list-disc pl-5",
                        for item in HIGHLIGHTS.iter() {
                            li { key: "{item}", {*item} }
                        }
                    }
                }
            }
        }
    }
}
