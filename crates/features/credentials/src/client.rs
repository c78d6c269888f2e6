use crate::scramble::{Scramble, run_scramble};
use crate::{CREDENTIAL_TILT, asset_label, pseudo_hash};
use dioxus::prelude::*;
use folio_domain::content::Certification;
use folio_kernel::prelude::SeededEntropy;
use folio_scene::TiltCard;

/// Grid of certification cards.
#[component]
pub fn CredentialVault(certifications: Vec<Certification>) -> Element {
    rsx! {
        div { class: "vault",
            for (index, cert) in certifications.iter().enumerate() {
                CredentialCard { key: "{cert.id}", cert: cert.clone(), index }
            }
        }
    }
}

#[component]
fn CredentialCard(cert: Certification, index: usize) -> Element {
    let mut hovered = use_signal(|| false);
    let mut scramble = use_signal(|| Scramble::new(&cert.name));
    let hash = pseudo_hash(&cert.id, &cert.issuer);
    let asset = asset_label(index);
    let state = if hovered() { "credential--hover" } else { "credential--idle" };
    let status = if hovered() { "VERIFIED" } else { "ENCRYPTED" };
    let name = scramble.read().display().to_owned();
    let id = cert.id.clone();

    rsx! {
        div {
            class: "credential {state}",
            onmouseenter: move |_| {
                hovered.set(true);
                let run = scramble.write().hover();
                tracing::debug!(credential = %id, run, "Scramble started");
                spawn(async move {
                    run_scramble(&mut scramble, run, &mut SeededEntropy::from_clock()).await;
                });
            },
            onmouseleave: move |_| {
                hovered.set(false);
                scramble.write().leave();
            },
            TiltCard { max_deg: CREDENTIAL_TILT, class: "credential__card",
                header { class: "credential__header",
                    span { class: "mono", "{asset}" }
                    span { class: "credential__status", "{status}" }
                }
                div { class: "credential__body",
                    span { class: "mono credential__caption", "Issuer Authority" }
                    p { class: "credential__issuer", "{cert.issuer}" }
                    h3 { class: "credential__name", "{name}" }
                    if let Some(year) = &cert.year {
                        span { class: "credential__year mono", "{year}" }
                    }
                }
                footer { class: "credential__footer",
                    span { class: "mono", "{hash}" }
                }
                div { class: "credential__scan" }
            }
        }
    }
}
