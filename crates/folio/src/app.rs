use crate::page::{copyright, section_title};
use chrono::Datelike;
use dioxus::prelude::*;
use folio_credentials::CredentialVault;
use folio_domain::constants::{ABOUT, CERTIFICATIONS, CONTACT, EXPERIENCE, SKILLS};
use folio_domain::content::PortfolioContent;
use folio_download::ResumeButton;
use folio_kernel::content::embedded;
use folio_kernel::prelude::SiteConfig;
use folio_navigation::NavBar;
use folio_profile::{ExecutiveProfile, ExperienceTimeline};
use folio_scene::{AmbientBackdrop, HeroScene};
use folio_skills::{KnowledgeGraph, SkillMatrix};
use folio_transmission::ContactPanel;

const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Root component. Uses the `SiteConfig` from context, or the defaults when none was provided.
#[component]
pub fn App() -> Element {
    use_hook(|| {
        try_consume_context::<SiteConfig>().unwrap_or_else(|| {
            tracing::debug!("No site config in context, using defaults");
            provide_context(SiteConfig::default())
        })
    });

    let page = match embedded() {
        Ok(content) => rsx! { Page { content: content.clone() } },
        Err(e) => {
            tracing::error!(error = %e, "Portfolio content unavailable");
            rsx! {
                main { class: "fatal",
                    h1 { "Content unavailable" }
                    pre { "{e}" }
                }
            }
        }
    };

    rsx! {
        document::Title { "Folio" }
        document::Style { {MAIN_CSS} }
        {page}
    }
}

#[component]
fn Page(content: PortfolioContent) -> Element {
    let year = chrono::Local::now().year();
    let footer = copyright(&content.name, year);

    rsx! {
        div { class: "site",
            AmbientBackdrop {}
            NavBar { brand: content.brand(), actions: rsx! { ResumeButton {} } }
            header { class: "hero",
                HeroScene {}
                div { class: "hero__copy",
                    h2 { class: "hero__eyebrow", "{content.hero.eyebrow}" }
                    h1 { class: "hero__name", "{content.name}" }
                    p { class: "hero__tagline", "{content.hero.tagline}" }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#{CONTACT}", "Schedule Consultation" }
                        a { class: "button", href: "#{EXPERIENCE}", "View Portfolio" }
                    }
                }
                span { class: "hero__scroll", "\u{2193}" }
            }
            main { class: "sections",
                Section { id: ABOUT,
                    ExecutiveProfile {
                        name: content.name.clone(),
                        summary: content.summary.clone(),
                        profile: content.profile.clone(),
                    }
                }
                Section { id: EXPERIENCE, shaded: true,
                    ExperienceTimeline { entries: content.experience.clone() }
                }
                Section { id: SKILLS,
                    SkillMatrix { skills: content.skills.clone() }
                    KnowledgeGraph { skills: content.skills.clone() }
                }
                Section { id: CERTIFICATIONS, shaded: true,
                    CredentialVault { certifications: content.certifications.clone() }
                }
                Section { id: CONTACT,
                    ContactPanel { contact: content.contact.clone() }
                }
            }
            footer { class: "footer", p { "{footer}" } }
        }
    }
}

#[component]
fn Section(id: &'static str, #[props(default)] shaded: bool, children: Element) -> Element {
    let title = section_title(id).unwrap_or_default();
    let tone = if shaded { "section section--shaded" } else { "section" };

    rsx! {
        section { id, class: tone,
            div { class: "section__inner",
                h2 { class: "section__title", "{title}" }
                div { class: "section__rule" }
                {children}
            }
        }
    }
}
