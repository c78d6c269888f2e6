use folio_kernel::entropy::{ScriptedEntropy, SeededEntropy};
use folio_scene::{CITIES, MAX_ARCS, ThreatMap, Vec3, bezier};
use proptest::prelude::*;

const FRAME: f64 = 1.0 / 60.0;

#[test]
fn pool_never_exceeds_capacity_and_feed_keeps_three() {
    let mut map = ThreatMap::new();
    let mut entropy = SeededEntropy::new(42);

    for _ in 0..(60 * 120) {
        map.step(FRAME, &mut entropy);
        assert!(map.active_arcs().count() <= MAX_ARCS);
        assert!(map.feed().count() <= 3);
    }
    assert_eq!(map.feed().count(), 3);
}

#[test]
fn arcs_retire_once_path_is_complete() {
    let mut map = ThreatMap::new();
    // Two distinct cities, slowest speed (0.2/s) → 5 s of flight.
    let mut entropy = ScriptedEntropy::new([0.0, 0.1, 0.0, 0.0]);
    map.step(0.9, &mut entropy);
    assert_eq!(map.active_arcs().count(), 1);

    let mut same_city = ScriptedEntropy::new([0.0]);
    for _ in 0..6 {
        map.step(1.0, &mut same_city);
    }
    assert_eq!(map.active_arcs().count(), 0);
}

#[test]
fn arc_control_point_height_is_capped() {
    let mut map = ThreatMap::new();
    // San Francisco → Sydney spans most of the map.
    let sf = CITIES.iter().position(|c| c.name == "San Francisco").expect("city") as f64;
    let sydney = CITIES.iter().position(|c| c.name == "Sydney").expect("city") as f64;
    let n = CITIES.len() as f64;
    let mut entropy = ScriptedEntropy::new([(sf + 0.5) / n, (sydney + 0.5) / n, 0.0, 0.0]);
    map.step(0.9, &mut entropy);

    let arc = map.active_arcs().next().expect("arc");
    assert!((arc.control.z - 2.5).abs() < 1e-12);
}

proptest! {
    #[test]
    fn bezier_hits_endpoints(
        a in prop::array::uniform3(-50.0f64..50.0),
        b in prop::array::uniform3(-50.0f64..50.0),
        c in prop::array::uniform3(-50.0f64..50.0),
    ) {
        let (p0, p1, p2) = (Vec3::new(a[0], a[1], a[2]), Vec3::new(b[0], b[1], b[2]), Vec3::new(c[0], c[1], c[2]));
        prop_assert!(bezier(p0, p1, p2, 0.0).distance(p0) < 1e-9);
        prop_assert!(bezier(p0, p1, p2, 1.0).distance(p2) < 1e-9);
    }

    #[test]
    fn bezier_stays_in_control_hull_box(
        a in prop::array::uniform3(-50.0f64..50.0),
        b in prop::array::uniform3(-50.0f64..50.0),
        c in prop::array::uniform3(-50.0f64..50.0),
        t in 0.0f64..=1.0,
    ) {
        let p = bezier(Vec3::new(a[0], a[1], a[2]), Vec3::new(b[0], b[1], b[2]), Vec3::new(c[0], c[1], c[2]), t);
        for (v, axis) in [(p.x, 0), (p.y, 1), (p.z, 2)] {
            let lo = a[axis].min(b[axis]).min(c[axis]) - 1e-9;
            let hi = a[axis].max(b[axis]).max(c[axis]) + 1e-9;
            prop_assert!((lo..=hi).contains(&v));
        }
    }
}
