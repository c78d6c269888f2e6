use crate::math::{Vec3, bezier, lat_lng_to_map};
use folio_kernel::entropy::Entropy;
use std::collections::VecDeque;

/// Size of the arc pool.
pub const MAX_ARCS: usize = 12;
pub const ARC_COLORS: [&str; 3] = ["#38bdf8", "#ffffff", "#94a3b8"];

const SPAWN_INTERVAL: f64 = 0.8;
const MAX_ARC_HEIGHT: f64 = 2.5;
const FEED_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    #[must_use]
    pub fn position(&self) -> Vec3 {
        lat_lng_to_map(self.lat, self.lng)
    }
}

pub const CITIES: [City; 18] = [
    City { name: "Bangalore", lat: 12.9716, lng: 77.5946 },
    City { name: "New Delhi", lat: 28.6139, lng: 77.2090 },
    City { name: "San Francisco", lat: 37.7749, lng: -122.4194 },
    City { name: "New York", lat: 40.7128, lng: -74.0060 },
    City { name: "London", lat: 51.5074, lng: -0.1278 },
    City { name: "Moscow", lat: 55.7558, lng: 37.6173 },
    City { name: "Tokyo", lat: 35.6762, lng: 139.6503 },
    City { name: "Sydney", lat: -33.8688, lng: 151.2093 },
    City { name: "Sao Paulo", lat: -23.5505, lng: -46.6333 },
    City { name: "Singapore", lat: 1.3521, lng: 103.8198 },
    City { name: "Dubai", lat: 25.2048, lng: 55.2708 },
    City { name: "Berlin", lat: 52.5200, lng: 13.4050 },
    City { name: "Beijing", lat: 39.9042, lng: 116.4074 },
    City { name: "Johannesburg", lat: -26.2041, lng: 28.0473 },
    City { name: "Paris", lat: 48.8566, lng: 2.3522 },
    City { name: "Cairo", lat: 30.0444, lng: 31.2357 },
    City { name: "Reykjavik", lat: 64.1466, lng: -21.9426 },
    City { name: "Lima", lat: -12.0464, lng: -77.0428 },
];

/// A projectile travelling between two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
    pub progress: f64,
    /// Fraction of the path covered per second.
    pub speed: f64,
    pub color: &'static str,
    pub active: bool,
}

impl Arc {
    const IDLE: Self = Self {
        start: Vec3::ZERO,
        control: Vec3::ZERO,
        end: Vec3::ZERO,
        progress: 0.0,
        speed: 0.0,
        color: ARC_COLORS[1],
        active: false,
    };

    #[must_use]
    pub fn position(&self) -> Vec3 {
        bezier(self.start, self.control, self.end, self.progress)
    }
}

/// One line of the "live data stream" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: u64,
    pub text: String,
    pub color: &'static str,
}

/// Hero map state: a fixed pool of arcs plus the three most recent launches.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatMap {
    arcs: [Arc; MAX_ARCS],
    elapsed: f64,
    last_spawn: f64,
    launched: u64,
    feed: VecDeque<FeedEntry>,
}

impl Default for ThreatMap {
    fn default() -> Self {
        Self {
            arcs: [Arc::IDLE; MAX_ARCS],
            elapsed: 0.0,
            last_spawn: 0.0,
            launched: 0,
            feed: VecDeque::with_capacity(FEED_LEN),
        }
    }
}

impl ThreatMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the scene by `dt` seconds.
    pub fn step<E: Entropy + ?Sized>(&mut self, dt: f64, entropy: &mut E) {
        self.elapsed += dt;
        if self.elapsed - self.last_spawn > SPAWN_INTERVAL {
            self.try_spawn(entropy);
        }

        for arc in self.arcs.iter_mut().filter(|a| a.active) {
            arc.progress += arc.speed * dt;
            if arc.progress >= 1.0 {
                arc.active = false;
            }
        }
    }

    fn try_spawn<E: Entropy + ?Sized>(&mut self, entropy: &mut E) {
        let Some(slot) = self.arcs.iter().position(|a| !a.active) else {
            return;
        };
        let (Some(source), Some(target)) = (entropy.pick(&CITIES), entropy.pick(&CITIES)) else {
            return;
        };
        if source.name == target.name {
            return;
        }

        let start = source.position();
        let end = target.position();
        let mut control = start.midpoint(end);
        control.z = (start.distance(end) * 0.5).min(MAX_ARC_HEIGHT);
        let speed = entropy.between(0.2, 0.4);
        let color = entropy.pick(&ARC_COLORS).copied().unwrap_or(ARC_COLORS[0]);

        self.arcs[slot] = Arc { start, control, end, progress: 0.0, speed, color, active: true };
        self.last_spawn = self.elapsed;
        self.launched += 1;

        if self.feed.len() == FEED_LEN {
            self.feed.pop_back();
        }
        self.feed.push_front(FeedEntry {
            id: self.launched,
            text: format!("{} ➔ {}", source.name, target.name),
            color,
        });
    }

    /// Arcs currently in flight.
    pub fn active_arcs(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter().filter(|a| a.active)
    }

    /// Newest first.
    pub fn feed(&self) -> impl Iterator<Item = &FeedEntry> {
        self.feed.iter()
    }

    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::entropy::ScriptedEntropy;

    #[test]
    fn nothing_spawns_before_interval() {
        let mut map = ThreatMap::new();
        let mut entropy = ScriptedEntropy::new([0.0, 0.5]);
        map.step(0.5, &mut entropy);
        assert_eq!(map.active_arcs().count(), 0);
        assert_eq!(map.feed().count(), 0);
    }

    #[test]
    fn spawn_waits_until_interval_is_exceeded() {
        let mut map = ThreatMap::new();
        let mut entropy = ScriptedEntropy::new([0.0, 0.5, 0.5, 0.0]);
        map.step(0.4, &mut entropy);
        map.step(0.4, &mut entropy);
        assert_eq!(map.active_arcs().count(), 0);

        map.step(0.01, &mut entropy);
        assert_eq!(map.active_arcs().count(), 1);
    }

    #[test]
    fn spawn_records_feed_entry() {
        let mut map = ThreatMap::new();
        // source Bangalore (0.0), target index 9 Singapore (0.5), speed, color
        let mut entropy = ScriptedEntropy::new([0.0, 0.5, 0.5, 0.0]);
        map.step(0.9, &mut entropy);

        let entry = map.feed().next().expect("one launch");
        assert_eq!(entry.text, "Bangalore ➔ Singapore");
        assert_eq!(entry.color, "#38bdf8");

        let arc = map.active_arcs().next().expect("arc in flight");
        assert!((arc.speed - 0.3).abs() < 1e-12);
    }

    #[test]
    fn same_city_draw_does_not_spawn_or_reset_timer() {
        let mut map = ThreatMap::new();
        let mut entropy = ScriptedEntropy::new([0.0]);
        map.step(1.0, &mut entropy);
        assert_eq!(map.active_arcs().count(), 0);
        assert!((map.last_spawn - 0.0).abs() < f64::EPSILON);
    }
}
