use dioxus::prelude::*;

use crate::components::{Reveal, Section, Tag};
use crate::data::SKILLS;

const STAGGER_MS: u32 = 30;

#[component]
pub fn Skills() -> Element {
    rsx! {
        Section {
            id: "skills",
            title: "Skills",
            div {
                class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for (i, skill) in SKILLS.iter().enumerate() {
                    Reveal {
                        key: "{skill.group}",
                        delay_ms: STAGGER_MS * i as u32,
                        class: "card rounded-2xl border p-5",
                        h4 { class: "font-medium mb-3", {skill.group} }
                        div {
                            class: "flex flex-wrap gap-2",
                            for item in skill.items.iter() {
                                Tag { key: "{item}", label: *item }
                            }
                        }
                    }
                }
            }
        }
    }
}
