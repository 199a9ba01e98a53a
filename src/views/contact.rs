use dioxus::prelude::*;

use crate::components::{Reveal, Section};
use crate::configs::contact_email;
use crate::data::CONTACT_NOTE;
use crate::utils::{build_mailto, ContactForm};

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::default);
    let email = contact_email();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let link = build_mailto(contact_email(), &form.read());
        open_mail_client(&link);
    };

    rsx! {
        Section {
            id: "contact",
            title: "Contact",
            div {
                class: "grid md:grid-cols-2 gap-8",
                Reveal {
                    class: "card rounded-2xl border p-5",
                    h3 { class: "font-medium", "Let's work together" }
                    p { class: "mt-2 text-sm opacity-90 leading-relaxed", {CONTACT_NOTE} }
                    a {
                        href: "mailto:{email}",
                        class: "mt-4 inline-flex items-center gap-2 px-4 py-2 rounded-xl bg-black text-white dark:bg-white dark:text-black hover:shadow text-sm",
                        span { aria_hidden: "true", "✉" }
                        "Email me"
                    }
                }
                Reveal {
                    delay_ms: 50,
                    form {
                        class: "card rounded-2xl border p-5",
                        onsubmit: on_submit,
                        div {
                            class: "grid gap-4",
                            label {
                                class: "text-sm",
                                "Name"
                                input {
                                    name: "name",
                                    required: true,
                                    class: "mt-1 w-full rounded-xl border px-3 py-2 bg-transparent",
                                    value: "{form.read().name}",
                                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                                }
                            }
                            label {
                                class: "text-sm",
                                "Email"
                                input {
                                    name: "email",
                                    r#type: "email",
                                    required: true,
                                    class: "mt-1 w-full rounded-xl border px-3 py-2 bg-transparent",
                                    value: "{form.read().email}",
                                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                                }
                            }
                            label {
                                class: "text-sm",
                                "Message"
                                textarea {
                                    name: "message",
                                    rows: "4",
                                    required: true,
                                    class: "mt-1 w-full rounded-xl border px-3 py-2 bg-transparent",
                                    value: "{form.read().message}",
                                    oninput: move |evt: FormEvent| form.write().message = evt.value(),
                                }
                            }
                            button {
                                r#type: "submit",
                                disabled: !form.read().is_complete(),
                                class: "justify-self-start px-4 py-2 rounded-xl border hover:shadow text-sm",
                                "Send"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_mail_client(link: &str) {
    let result = web_sys::window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))
        .and_then(|w| w.location().set_href(link));
    if let Err(e) = result {
        log::error!("Failed to open mail client: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_mail_client(link: &str) {
    log::info!("Contact form submitted, mail link: {}", link);
}
