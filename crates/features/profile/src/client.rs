use crate::counter::{Counter, run_counter};
use crate::timeline::{Reveal, side_for};
use crate::PROFILE_TILT;
use dioxus::prelude::*;
use folio_domain::content::{ExperienceEntry, Metric, ProfileCopy};
use folio_scene::TiltCard;

/// Identity card plus the narrative and metric dashboard of the about section.
#[component]
pub fn ExecutiveProfile(name: String, summary: String, profile: ProfileCopy) -> Element {
    let badge = name.to_uppercase();

    rsx! {
        div { class: "profile",
            div { class: "profile__card-column",
                TiltCard { max_deg: PROFILE_TILT, class: "profile__card",
                    header { class: "profile__card-header",
                        span { class: "dot dot--red" }
                        span { class: "dot dot--amber" }
                        span { class: "dot dot--green" }
                        span { class: "mono", "ID_REF_8829" }
                    }
                    div { class: "profile__rings",
                        span { class: "ring ring--outer" }
                        span { class: "ring ring--inner" }
                        span { class: "ring ring--dashed" }
                    }
                    footer { class: "profile__card-footer",
                        h3 { "{badge}" }
                        p { class: "mono", "SECURE_ACCESS_GRANTED" }
                        div { class: "profile__attributes",
                            for attribute in profile.attributes.iter() {
                                span { key: "{attribute}", class: "profile__attribute", "{attribute}" }
                            }
                        }
                    }
                }
            }
            div { class: "profile__narrative",
                span { class: "mono profile__eyebrow", "Identity_Verified_v2.0" }
                h3 { class: "profile__headline", "{profile.headline}" }
                p { class: "profile__summary", "{summary}" }
                blockquote { class: "profile__biography", "{profile.biography}" }
                div { class: "profile__metrics",
                    for metric in profile.metrics.iter() {
                        MetricBox { key: "{metric.label}", metric: metric.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricBox(metric: Metric) -> Element {
    let mut counter = use_signal(|| Counter::new(metric.value));
    let value = counter.read().value();

    rsx! {
        div {
            class: "metric",
            onvisible: move |e| {
                if e.is_intersecting().unwrap_or(false) && counter.write().start() {
                    spawn(async move { run_counter(&mut counter).await });
                }
            },
            if metric.bar {
                div { class: "metric__bar", style: "width: {value}%" }
            }
            div { class: "metric__value mono", "{value}{metric.suffix}" }
            div { class: "metric__label", "{metric.label}" }
        }
    }
}

/// Career entries on alternating sides of a central rail.
#[component]
pub fn ExperienceTimeline(entries: Vec<ExperienceEntry>) -> Element {
    rsx! {
        div { class: "timeline",
            div { class: "timeline__rail" }
            for (index, entry) in entries.iter().enumerate() {
                TimelineItem { key: "{entry.id}", entry: entry.clone(), index }
            }
        }
    }
}

#[component]
fn TimelineItem(entry: ExperienceEntry, index: usize) -> Element {
    let mut reveal = use_signal(Reveal::default);
    let side = side_for(index).class();
    let state = if reveal.read().shown() { "timeline__item--shown" } else { "timeline__item--hidden" };

    rsx! {
        div {
            class: "timeline__item {side} {state}",
            onvisible: move |e| {
                let visible = e.is_intersecting().unwrap_or(false);
                if reveal.peek().shown() {
                    return;
                }
                if reveal.write().observe(visible) {
                    tracing::debug!(index, "Timeline entry revealed");
                }
            },
            div { class: "timeline__spacer" }
            div { class: "timeline__node" }
            article { class: "timeline__card",
                header {
                    h3 { "{entry.role}" }
                    span { class: "timeline__period mono", "{entry.period}" }
                }
                p { class: "timeline__company", "{entry.company}" }
                ul {
                    for line in entry.description.iter() {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}
