use dioxus::prelude::*;

use crate::data::person_json_ld;
use crate::views::{About, Contact, Footer, Hero, Projects, Skills};

#[component]
pub fn Home() -> Element {
    let json_ld = use_hook(|| person_json_ld().to_string());

    rsx! {
        document::Script { r#type: "application/ld+json", "{json_ld}" }
        main {
            class: "page-reveal",
            Hero {}
            About {}
            Skills {}
            Projects {}
            Contact {}
            Footer {}
        }
    }
}
