use dioxus::prelude::*;

/// Fades its children up into place once mounted. `delay_ms` staggers siblings.
#[component]
pub fn Reveal(
    #[props(default)] delay_ms: u32,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "reveal {class}",
            style: "animation-delay: {delay_ms}ms",
            {children}
        }
    }
}
