use crate::driver::run_transmission;
use crate::form::Field;
use crate::model::{Phase, Transmission};
use crate::relay::HttpRelay;
use dioxus::prelude::*;
use folio_domain::content::ContactInfo;
use folio_kernel::prelude::{SeededEntropy, SiteConfig};

#[component]
pub fn ContactPanel(contact: ContactInfo) -> Element {
    let config = use_context::<SiteConfig>();
    let mut model = use_signal(|| Transmission::new(&config));
    let relay = use_hook(|| {
        if config.relay.is_placeholder() {
            tracing::warn!(
                endpoint = %config.relay.endpoint,
                "Form relay still points at the placeholder address; set FOLIO__RELAY__ENDPOINT"
            );
        }
        HttpRelay::builder().endpoint(config.relay.endpoint.clone()).build()
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let relay = relay.clone();
        spawn(async move {
            let mut model = model;
            let mut entropy = SeededEntropy::from_clock();
            run_transmission(&mut model, &relay, &mut entropy).await;
        });
    };

    let state = model.read();
    let busy = state.overlay_visible();
    let progress = state.progress();
    let mailto = format!("mailto:{}", contact.email);

    rsx! {
        div { class: "uplink",
            div { class: "uplink__intel",
                div { class: "uplink__badge", "NET_RELAY_V4" }
                h3 { class: "uplink__title", "Initialize Contact" }
                p { class: "uplink__lead",
                    "Secure channel open for consulting inquiries, speaking engagements, and strategic collaborations."
                }
                ContactItem { label: "Encrypted Mail", value: contact.email.clone(), href: mailto }
                ContactItem { label: "Secure Line", value: contact.phone.clone() }
                ContactItem { label: "Base of Operations", value: contact.location.clone() }
                if let Some(linkedin) = contact.linkedin.clone() {
                    ContactItem { label: "Professional Network", value: "LinkedIn Profile", href: linkedin }
                }
                div { class: "uplink__status",
                    span { class: "status status--ok", "System Nominal" }
                    span { class: "status", "Firewall Active" }
                    span { class: "status", "Latency: 12ms" }
                }
            }
            div { class: "uplink__console",
                if busy {
                    div { class: "uplink__overlay",
                        if state.phase() == Phase::Success {
                            div { class: "uplink__success",
                                div { class: "uplink__check", "✓" }
                                h3 { {state.headline()} }
                                p { "Target received payload. Stand by for response." }
                            }
                        } else {
                            div { class: "uplink__progress",
                                div { class: "uplink__dial", "{progress:.0}%" }
                                h3 { class: "pulse", {state.headline()} }
                                div { class: "bar",
                                    div { class: "bar__fill", style: "width: {progress}%" }
                                }
                                div { class: "terminal",
                                    for (i, line) in state.logs().iter().enumerate() {
                                        div { key: "{i}", class: "terminal__line", "{line}" }
                                    }
                                    div { class: "terminal__cursor", "_" }
                                }
                            }
                        }
                    }
                }
                div { class: "uplink__hud",
                    span { "/usr/bin/secure_uplink" }
                    span { class: "uplink__signal", "SIGNAL: STRONG" }
                }
                form { class: "uplink__form", onsubmit,
                    div { class: "uplink__row",
                        label { r#for: "name", "Identity" }
                        input {
                            id: "name",
                            r#type: "text",
                            required: true,
                            placeholder: "ENTER NAME",
                            disabled: busy,
                            value: state.form().name.clone(),
                            oninput: move |e| { model.write().edit(Field::Name, e.value()); },
                        }
                        label { r#for: "email", "Return Address" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "ENTER EMAIL",
                            disabled: busy,
                            value: state.form().email.clone(),
                            oninput: move |e| { model.write().edit(Field::Email, e.value()); },
                        }
                    }
                    label { r#for: "message", "Transmission Packet" }
                    textarea {
                        id: "message",
                        rows: 5,
                        required: true,
                        placeholder: "> INPUT MESSAGE SEQUENCE...",
                        disabled: busy,
                        value: state.form().message.clone(),
                        oninput: move |e| { model.write().edit(Field::Message, e.value()); },
                    }
                    div { class: "uplink__actions",
                        span { class: "uplink__note", "End-to-End Encrypted" }
                        button { r#type: "submit", class: "btn btn--primary", disabled: busy, "INITIATE UPLINK ➤" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactItem(label: &'static str, value: String, href: Option<String>) -> Element {
    rsx! {
        a { class: if href.is_some() { "contact-item contact-item--link" } else { "contact-item" }, href,
            span { class: "contact-item__label", "{label}" }
            span { class: "contact-item__value", "{value}" }
        }
    }
}
