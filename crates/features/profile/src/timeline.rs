/// Which half of the timeline an entry's card sits on (wide layouts only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline__item--left",
            Self::Right => "timeline__item--right",
        }
    }
}

/// Even entries on the left, odd on the right.
#[must_use]
pub const fn side_for(index: usize) -> Side {
    if index % 2 == 0 { Side::Left } else { Side::Right }
}

/// Trigger-once visibility latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    /// Feeds a visibility report; returns `true` only on the first sighting.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.shown || !visible {
            return false;
        }
        self.shown = true;
        true
    }

    #[must_use]
    pub const fn shown(self) -> bool {
        self.shown
    }
}
