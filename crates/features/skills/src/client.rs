use crate::cloud::{CLOUD_RADIUS, SkillCloud};
use crate::grid::{ANIMATION, Selection, SkillGrid, SkillTab, load_level};
use dioxus::prelude::*;
use folio_domain::content::{Skill, SkillCategory};
use folio_kernel::prelude::{FRAME, sleep};
use folio_scene::{Camera, Vec3, Viewport};

const CLOUD_VIEW: Viewport = Viewport { width: 800.0, height: 400.0 };
const CLOUD_CAMERA: Camera =
    Camera { position: Vec3::new(0.0, 0.0, 35.0), pitch: 0.0, fov_deg: 50.0, viewport: CLOUD_VIEW };

const fn tab_icon(tab: SkillTab) -> &'static str {
    match tab {
        SkillTab::All => "▦",
        SkillTab::Core => "◈",
        SkillTab::Tech => "⛨",
        SkillTab::Tool => "⛁",
    }
}

/// Tabbed capabilities matrix.
#[component]
pub fn SkillMatrix(skills: Vec<Skill>) -> Element {
    let grid = use_signal(SkillGrid::default);
    let state = grid.read().clone();
    let active = state.tab();

    rsx! {
        div { class: "matrix",
            div { class: "matrix__deck",
                div {
                    h3 { class: "matrix__title", "Capabilities Matrix" span { class: "badge badge--live", "LIVE" } }
                    p { class: "matrix__hint", "Select a subsystem to filter operational capabilities." }
                }
                div { class: "tabs",
                    for tab in SkillTab::all() {
                        button {
                            key: "{tab}",
                            class: if tab == active { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                            onclick: move |_| select_tab(grid, tab),
                            span { class: "tabs__icon", {tab_icon(tab)} }
                            span { class: "tabs__label", {tab.label()} }
                        }
                    }
                }
            }
            div {
                key: "{active}",
                class: if state.animating() { "matrix__grid matrix__grid--animating" } else { "matrix__grid" },
                for (index, skill) in active.filter(&skills).into_iter().enumerate() {
                    SkillCard { key: "{skill.name}-{index}", skill: skill.clone(), index }
                }
            }
        }
    }
}

fn select_tab(mut grid: Signal<SkillGrid>, tab: SkillTab) {
    let Selection::Changed { epoch } = grid.write().select(tab) else {
        return;
    };
    tracing::debug!(%tab, "Skill tab selected");
    spawn(async move {
        sleep(ANIMATION).await;
        grid.write().settle(epoch);
    });
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> Element {
    let level = load_level(skill.category, index);
    let (modifier, icon) = match skill.category {
        SkillCategory::Core => ("skill-card--core", "⚡"),
        SkillCategory::Tech => ("skill-card--tech", "⛨"),
        SkillCategory::Tool => ("skill-card--tool", "⌘"),
    };
    let delay = index * 50;

    rsx! {
        div { class: "skill-card {modifier}", style: "animation-delay: {delay}ms",
            div { class: "skill-card__head",
                span { class: "skill-card__icon", "{icon}" }
                span { class: "skill-card__status", "SYS_RDY" }
            }
            h4 { class: "skill-card__name", "{skill.name}" }
            div { class: "skill-card__meta",
                span { "{skill.category}" }
                span { "{level}%" }
            }
            div { class: "bar",
                div { class: "bar__fill", style: "width: {level}%" }
            }
        }
    }
}

/// Rotating knowledge graph of every skill.
#[component]
pub fn KnowledgeGraph(skills: Vec<Skill>) -> Element {
    let mut cloud = use_signal(|| SkillCloud::new(&skills, CLOUD_RADIUS));

    use_future(move || async move {
        loop {
            sleep(FRAME).await;
            cloud.write().spin(1.0);
        }
    });

    let state = cloud.read();
    let points: Vec<_> = (0..state.words().len())
        .map(|i| state.rotated(i).and_then(|p| CLOUD_CAMERA.project(p)))
        .collect();
    let lines: Vec<_> = state
        .connections()
        .iter()
        .filter_map(|&(i, j)| Some((points.get(i).copied().flatten()?, points.get(j).copied().flatten()?)))
        .collect();
    let mut labels: Vec<_> = state
        .words()
        .iter()
        .zip(&points)
        .filter_map(|(word, p)| p.map(|p| (word, p)))
        .collect();
    labels.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));
    let core = CLOUD_CAMERA.project(Vec3::ZERO);

    rsx! {
        div { class: "graph",
            div { class: "graph__header",
                span { "KNOWLEDGE_GRAPH_VISUALIZER" }
            }
            svg { class: "graph__canvas", view_box: CLOUD_VIEW.view_box(),
                if let Some(c) = core {
                    circle { cx: c.x, cy: c.y, r: 4.0 * c.scale, fill: "#020617", fill_opacity: 0.9 }
                    circle { cx: c.x, cy: c.y, r: 4.2 * c.scale, fill: "none", stroke: "#38bdf8", stroke_opacity: 0.15 }
                }
                for (i, (a, b)) in lines.into_iter().enumerate() {
                    line { key: "l{i}", x1: a.x, y1: a.y, x2: b.x, y2: b.y, stroke: "#38bdf8", stroke_opacity: 0.08 }
                }
                for (word, p) in labels {
                    text {
                        key: "{word.name}",
                        x: p.x,
                        y: p.y,
                        fill: word.color,
                        font_size: 0.45 * p.scale,
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        fill_opacity: 0.9,
                        class: "graph__word",
                        "{word.name}"
                    }
                }
            }
            div { class: "graph__footer",
                span { "Rendering: SVG" }
                span { class: "status status--ok", "Status: Active" }
            }
        }
    }
}
