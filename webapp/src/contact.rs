use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::error;

use api::contact::{ContactMessage, send_message};

use crate::{
    components::reveal::reveal_class,
    state::{CONTACT, config},
};

// kicks off the simulated submission
//
// the form state machine refuses a second submit while one is in flight, so a
// double click cannot stack timers
fn submit_contact(
    mut name: Signal<String>,
    mut email: Signal<String>,
    mut message: Signal<String>,
) {
    let Some(ticket) = CONTACT.write().submit() else {
        return;
    };

    let msg = ContactMessage {
        name: name(),
        email: email(),
        message: message(),
    };

    spawn(async move {
        match send_message(&msg, config().contact.latency_ms).await {
            Ok(()) => {
                if !CONTACT.write().delivered(ticket) {
                    return;
                }

                name.set(String::new());
                email.set(String::new());
                message.set(String::new());

                let reset = CONTACT.peek().ticket();
                Timeout::new(config().contact.reset_delay_ms, move || {
                    CONTACT.write().settle(reset);
                })
                .forget();
            }
            Err(err) => {
                error!("failed to send contact message: {err}");
                CONTACT.write().failed(ticket);
            }
        }
    });
}

#[component]
pub fn ContactSection() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let form = CONTACT.read();
    let label = form.label();
    let disabled = form.is_disabled();
    let pending = form.is_pending();
    let success = form.show_success();
    drop(form);

    rsx! {
        section { id: "contact", class: "page-section",
            div {
                class: reveal_class("contact-card", "contact"),
                "data-reveal": "contact",
                style: "max-width: 640px; margin: 0 auto;",

                h2 { class: "section-title", "Get In Touch" }

                form {
                    id: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit_contact(name, email, message);
                    },

                    div { class: "form-group",
                        label { r#for: "contact-name", "Name" }
                        input {
                            id: "contact-name",
                            class: "form-input",
                            r#type: "text",
                            name: "name",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "contact-email", "Email" }
                        input {
                            id: "contact-email",
                            class: "form-input",
                            r#type: "email",
                            name: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            class: "form-textarea",
                            name: "message",
                            rows: 5,
                            required: true,
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }

                    button {
                        class: if success {
                            "btn btn-primary btn-success"
                        } else {
                            "btn btn-primary"
                        },
                        r#type: "submit",
                        disabled,
                        "aria-busy": if pending { "true" } else { "false" },
                        "{label}"
                    }
                }

                p {
                    id: "form-status",
                    class: if success { "form-status" } else { "form-status hidden" },
                    "role": "status",
                    "Thanks! Your message has been sent. I'll get back to you soon."
                }
            }
        }
    }
}
