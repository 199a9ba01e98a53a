use dioxus::prelude::*;

use crate::components::{Reveal, Section, Tag};
use crate::data::PROJECTS;

const STAGGER_MS: u32 = 50;

#[component]
pub fn Projects() -> Element {
    rsx! {
        Section {
            id: "projects",
            title: "Projects",
            div {
                class: "grid md:grid-cols-2 gap-6",
                for (i, project) in PROJECTS.iter().enumerate() {
                    Reveal {
                        key: "{project.name}",
                        delay_ms: STAGGER_MS * i as u32,
                        class: "card rounded-2xl border p-5 hover:shadow-sm",
                        article {
                            h3 { class: "font-semibold text-lg tracking-tight", {project.name} }
                            p { class: "mt-2 text-sm opacity-90 leading-relaxed", {project.desc} }
                            div {
                                class: "mt-3 flex flex-wrap gap-2",
                                for tag in project.tags.iter() {
                                    Tag { key: "{tag}", label: *tag }
                                }
                            }
                            div {
                                class: "mt-4 flex flex-wrap gap-3",
                                for link in project.links.iter() {
                                    a {
                                        key: "{link.label}",
                                        href: link.href,
                                        target: "_blank",
                                        rel: "noreferrer",
                                        class: "inline-flex items-center gap-2 text-sm px-3 py-2 rounded-xl border hover:shadow",
                                        span { aria_hidden: "true", "↗" }
                                        {link.label}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
