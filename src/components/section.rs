use dioxus::prelude::*;

use crate::components::Reveal;

#[component]
pub fn Section(id: &'static str, title: &'static str, children: Element) -> Element {
    rsx! {
        section {
            id: id,
            class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            Reveal {
                h2 {
                    class: "text-2xl sm:text-3xl font-semibold tracking-tight mb-8",
                    {title}
                }
            }
            {children}
        }
    }
}

#[component]
pub fn Tag(label: &'static str) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2.5 py-1 text-xs font-medium opacity-90",
            {label}
        }
    }
}
