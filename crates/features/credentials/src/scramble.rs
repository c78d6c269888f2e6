use folio_kernel::prelude::{Entropy, StateCell, sleep_until};
use std::time::Duration;

pub const SCRAMBLE_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '@', '#',
    '$', '%', '&',
];

pub const SCRAMBLE_TICK: Duration = Duration::from_millis(30);

/// Text that resolves left to right out of random glyphs, half a character per tick.
///
/// Progress is counted in half characters so it stays integral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    target: Vec<char>,
    display: String,
    half_steps: usize,
    active: bool,
    run: u64,
}

impl Scramble {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            display: text.to_owned(),
            half_steps: 0,
            active: false,
            run: 0,
        }
    }

    /// Starts a fresh scramble and returns its run id.
    pub fn hover(&mut self) -> u64 {
        self.run += 1;
        self.active = true;
        self.half_steps = 0;
        self.run
    }

    /// Stops any run and shows the plain text.
    pub fn leave(&mut self) {
        self.run += 1;
        self.active = false;
        self.display = self.target.iter().collect();
    }

    /// Re-renders the display for the current run.
    ///
    /// Characters whose index is below the resolved count show their real
    /// glyph; the rest are drawn from [`SCRAMBLE_ALPHABET`]. Returns `false`
    /// once the text is fully resolved or `run` is stale.
    pub fn tick<E: Entropy + ?Sized>(&mut self, run: u64, entropy: &mut E) -> bool {
        if !self.active || run != self.run {
            return false;
        }
        let resolved = self.half_steps.div_ceil(2);
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| if i < resolved { c } else { *entropy.pick(SCRAMBLE_ALPHABET).unwrap_or(&c) })
            .collect();

        if self.half_steps >= self.target.len() * 2 {
            self.active = false;
            return false;
        }
        self.half_steps += 1;
        true
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn run(&self) -> u64 {
        self.run
    }
}

/// Drives one scramble run at [`SCRAMBLE_TICK`] until it resolves or is superseded.
pub async fn run_scramble<S, E>(state: &mut S, run: u64, entropy: &mut E)
where
    S: StateCell<Scramble>,
    E: Entropy + ?Sized,
{
    let mut now = Duration::ZERO;
    while state.update(|s| s.tick(run, entropy)) {
        now = sleep_until(now, now + SCRAMBLE_TICK).await;
    }
}
