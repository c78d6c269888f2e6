use crate::camera::{Camera, Projected, Viewport};
use crate::field::{DataField, STRATEGIC_SHAPES, ShapeKind, grid_lines};
use crate::float::float_offset;
use crate::math::{MAP_HEIGHT, MAP_WIDTH, Vec3, bezier};
use crate::stars::Starfield;
use crate::threat::{CITIES, ThreatMap};
use crate::tilt::Tilt;
use dioxus::prelude::*;
use folio_kernel::prelude::{FRAME, SeededEntropy, sleep};
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

const HERO_VIEW: Viewport = Viewport { width: 1200.0, height: 720.0 };
const BACKDROP_VIEW: Viewport = Viewport { width: 1600.0, height: 900.0 };
const MAP_TILT: f64 = 0.4;
const TRAIL_SAMPLES: u32 = 6;

const HERO_CAMERA: Camera =
    Camera { position: Vec3::new(0.0, -5.0, 7.0), pitch: 0.6, fov_deg: 45.0, viewport: HERO_VIEW };
const BACKDROP_CAMERA: Camera =
    Camera { position: Vec3::new(0.0, 0.0, 25.0), pitch: 0.0, fov_deg: 50.0, viewport: BACKDROP_VIEW };

type Segment = (Projected, Projected);

fn project_segments(camera: &Camera, lines: impl IntoIterator<Item = (Vec3, Vec3)>) -> Vec<Segment> {
    lines.into_iter().filter_map(|(a, b)| Some((camera.project(a)?, camera.project(b)?))).collect()
}

/// Fog between `near` and `far`, as an opacity multiplier.
fn fog(depth: f64, near: f64, far: f64) -> f64 {
    1.0 - ((depth - near) / (far - near)).clamp(0.0, 1.0)
}

fn on_map(point: Vec3) -> Vec3 {
    point.rotate_x(MAP_TILT)
}

struct Sprite {
    x: f64,
    y: f64,
    size: f64,
    transform: String,
    opacity: f64,
}

struct Flight {
    trail: String,
    head: Option<Projected>,
    color: &'static str,
}

fn polyline(points: impl IntoIterator<Item = Projected>) -> String {
    points.into_iter().map(|p| format!("{:.1},{:.1}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

/// Hero backdrop: tilted world map with arcs flying between cities.
#[component]
pub fn HeroScene() -> Element {
    let mut map = use_signal(ThreatMap::new);
    let grid = use_hook(|| {
        let lift = |p: Vec3| on_map(p.rotate_x(FRAC_PI_2) + Vec3::new(0.0, 0.0, -0.1));
        let plane = grid_lines(MAP_WIDTH + 8.0, 40, 0.0).into_iter().map(|(a, b)| (lift(a), lift(b)));
        Rc::new(project_segments(&HERO_CAMERA, plane))
    });
    let cities = use_hook(|| {
        Rc::new(CITIES.iter().filter_map(|c| HERO_CAMERA.project(on_map(c.position()))).collect::<Vec<_>>())
    });
    let outline = use_hook(|| {
        let (w, h) = (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);
        polyline(
            [(-w, -h), (w, -h), (w, h), (-w, h)]
                .into_iter()
                .filter_map(|(x, y)| HERO_CAMERA.project(on_map(Vec3::new(x, y, 0.0)))),
        )
    });

    use_future(move || async move {
        let mut entropy = SeededEntropy::from_clock();
        let dt = FRAME.as_secs_f64();
        loop {
            sleep(FRAME).await;
            map.write().step(dt, &mut entropy);
        }
    });

    let state = map.read();
    let flights: Vec<Flight> = state
        .active_arcs()
        .map(|arc| Flight {
            trail: polyline((0..=TRAIL_SAMPLES).filter_map(|k| {
                let t = f64::from(k).mul_add(-0.02, arc.progress).max(0.0);
                HERO_CAMERA.project(on_map(bezier(arc.start, arc.control, arc.end, t)))
            })),
            head: HERO_CAMERA.project(on_map(arc.position())),
            color: arc.color,
        })
        .collect();
    let title = float_offset(state.elapsed(), 1.5, 0.02, 0.05);
    let title_style = format!(
        "transform: translateY({:.2}px) rotate({:.3}rad)",
        -title.lift * 400.0,
        title.rotation.z
    );
    let feed_empty = state.feed().next().is_none();

    rsx! {
        div { class: "hero-scene",
            StarLayer {}
            svg {
                class: "hero-scene__map",
                view_box: HERO_VIEW.view_box(),
                preserve_aspect_ratio: "xMidYMid slice",
                for (i, (a, b)) in grid.iter().enumerate() {
                    line { key: "g{i}", x1: a.x, y1: a.y, x2: b.x, y2: b.y, stroke: "#1e293b", stroke_width: 0.6 }
                }
                polygon { points: outline, fill: "#a5b4fc", fill_opacity: 0.06, stroke: "#1e293b" }
                for (i, city) in cities.iter().enumerate() {
                    circle { key: "c{i}", cx: city.x, cy: city.y, r: 0.04 * city.scale, fill: "#94a3b8" }
                }
                for (i, flight) in flights.into_iter().enumerate() {
                    g { key: "a{i}",
                        polyline {
                            points: flight.trail,
                            fill: "none",
                            stroke: "rgb(51,128,255)",
                            stroke_opacity: 0.6,
                            stroke_width: 2,
                        }
                        if let Some(head) = flight.head {
                            circle { cx: head.x, cy: head.y, r: 0.036 * head.scale, fill: flight.color }
                        }
                    }
                }
            }
            div { class: "hero-scene__title", style: title_style,
                div { class: "hero-scene__headline", "GLOBAL INFRASTRUCTURE" }
                div { class: "hero-scene__tagline", "SECURE • SCALABLE • RESILIENT" }
            }
            div { class: "feed",
                div { class: "feed__header", span { class: "feed__dot" } "LIVE DATA STREAM" }
                for entry in state.feed() {
                    div { key: "{entry.id}", class: "feed__row",
                        span { class: "feed__text", "{entry.text}" }
                        span { class: "feed__swatch", style: "background-color: {entry.color}" }
                    }
                }
                if feed_empty {
                    span { class: "feed__pending", "Initializing..." }
                }
            }
        }
    }
}

/// Fixed stars seen from the origin, laid out once at mount. Only the hero owns one.
#[component]
fn StarLayer() -> Element {
    let stars = use_hook(move || {
        let camera = Camera { position: Vec3::ZERO, pitch: 0.0, fov_deg: 75.0, viewport: BACKDROP_VIEW };
        let field = Starfield::hero(&mut SeededEntropy::from_clock());
        let mut visible: Vec<(Projected, f64)> = field
            .stars()
            .iter()
            .filter_map(|s| camera.project(s.position).map(|p| (p, s.size)))
            .collect();
        visible.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));
        tracing::trace!(count = field.stars().len(), visible = visible.len(), "Starfield laid out");
        Rc::new(visible)
    });

    rsx! {
        svg { class: "stars", view_box: BACKDROP_VIEW.view_box(), preserve_aspect_ratio: "xMidYMid slice",
            for (i, (p, size)) in stars.iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: p.x,
                    cy: p.y,
                    r: size * 1.2,
                    fill: "#ffffff",
                    fill_opacity: fog(p.depth, 100.0, 150.0).max(0.2),
                }
            }
        }
    }
}

/// Page-wide backdrop: drifting data nodes, two faint shapes and a floor grid.
#[component]
pub fn AmbientBackdrop() -> Element {
    let mut field = use_signal(|| DataField::new(DataField::DEFAULT_COUNT, &mut SeededEntropy::from_clock()));
    let mut clock = use_signal(|| 0.0_f64);
    let grid = use_hook(|| Rc::new(project_segments(&BACKDROP_CAMERA, grid_lines(100.0, 60, -10.0))));

    use_future(move || async move {
        let dt = FRAME.as_secs_f64();
        loop {
            sleep(FRAME).await;
            field.write().step();
            *clock.write() += dt;
        }
    });

    let time = clock();
    let shapes: Vec<(Sprite, ShapeKind, &'static str)> = STRATEGIC_SHAPES
        .iter()
        .filter_map(|shape| {
            let motion = float_offset(time, shape.speed, 0.2, 0.2);
            let p = BACKDROP_CAMERA.project(shape.center + Vec3::new(0.0, motion.lift, 0.0))?;
            let sprite = Sprite {
                x: p.x,
                y: p.y,
                size: shape.size * p.scale,
                transform: format!("rotate({:.2} {:.1} {:.1})", motion.rotation.y.to_degrees(), p.x, p.y),
                opacity: shape.opacity * 4.0,
            };
            Some((sprite, shape.kind, shape.color))
        })
        .collect();
    let nodes: Vec<Sprite> = field
        .read()
        .nodes()
        .iter()
        .filter_map(|node| {
            let p = BACKDROP_CAMERA.project(node.position())?;
            Some(Sprite {
                x: p.x,
                y: p.y,
                size: 0.4 * p.scale,
                transform: format!("rotate({:.1} {:.1} {:.1})", node.yaw().to_degrees() % 360.0, p.x, p.y),
                opacity: 0.15 * fog(p.depth, 10.0, 60.0),
            })
        })
        .collect();

    rsx! {
        div { class: "backdrop",
            svg { view_box: BACKDROP_VIEW.view_box(), preserve_aspect_ratio: "xMidYMid slice",
                for (i, (a, b)) in grid.iter().enumerate() {
                    line {
                        key: "g{i}",
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        stroke: "#1e293b",
                        stroke_opacity: fog(a.depth.min(b.depth), 10.0, 60.0),
                    }
                }
                for (i, (shape, kind, color)) in shapes.into_iter().enumerate() {
                    g { key: "s{i}", transform: shape.transform, fill: "none", stroke: color, stroke_opacity: shape.opacity,
                        if kind == ShapeKind::Sphere {
                            circle { cx: shape.x, cy: shape.y, r: shape.size }
                            ellipse { cx: shape.x, cy: shape.y, rx: shape.size, ry: shape.size * 0.35 }
                        } else {
                            rect {
                                x: shape.x - shape.size / 2.0,
                                y: shape.y - shape.size / 2.0,
                                width: shape.size,
                                height: shape.size,
                            }
                        }
                    }
                }
                for (i, node) in nodes.into_iter().enumerate() {
                    rect {
                        key: "n{i}",
                        x: node.x - node.size / 2.0,
                        y: node.y - node.size / 2.0,
                        width: node.size,
                        height: node.size,
                        transform: node.transform,
                        fill: "none",
                        stroke: "#38bdf8",
                        stroke_opacity: node.opacity,
                    }
                }
            }
        }
    }
}

/// Card that leans toward the pointer, up to `max_deg` on each axis.
#[component]
pub fn TiltCard(max_deg: f64, #[props(default)] class: String, children: Element) -> Element {
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let mut tilt = use_signal(Tilt::default);
    let transform = tilt.read().transform();

    rsx! {
        div {
            class: "tilt {class}",
            style: "transform: {transform}",
            onmounted: move |e| mounted.set(Some(e.data())),
            onmousemove: move |e| {
                let pointer = e.client_coordinates();
                async move {
                    let Some(card) = mounted() else { return };
                    if let Ok(rect) = card.get_client_rect().await {
                        tilt.set(Tilt::from_pointer(
                            pointer.x - rect.origin.x,
                            pointer.y - rect.origin.y,
                            rect.size.width,
                            rect.size.height,
                            max_deg,
                        ));
                    }
                }
            },
            onmouseleave: move |_| tilt.set(Tilt::default()),
            {children}
        }
    }
}
