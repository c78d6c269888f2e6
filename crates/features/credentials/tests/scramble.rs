use folio_credentials::{SCRAMBLE_ALPHABET, Scramble, run_scramble};
use folio_kernel::entropy::{ScriptedEntropy, SeededEntropy};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn run_resolves_after_two_ticks_per_glyph() {
    let mut state = Rc::new(RefCell::new(Scramble::new("CISM")));
    let run = state.borrow_mut().hover();
    let start = Instant::now();

    run_scramble(&mut state, run, &mut ScriptedEntropy::new([0.3])).await;

    assert_eq!(state.borrow().display(), "CISM");
    assert!(!state.borrow().active());
    assert_eq!(start.elapsed(), Duration::from_millis(8 * 30));
}

#[tokio::test(start_paused = true)]
async fn leaving_mid_run_stops_the_driver() {
    let state = Rc::new(RefCell::new(Scramble::new("SECURITY+")));
    let run = state.borrow_mut().hover();

    let mut driver_state = Rc::clone(&state);
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let handle = tokio::task::spawn_local(async move {
                run_scramble(&mut driver_state, run, &mut ScriptedEntropy::new([0.1])).await;
            });
            tokio::time::sleep(Duration::from_millis(95)).await;
            state.borrow_mut().leave();
            handle.await.expect("driver task");
            assert_eq!(state.borrow().display(), "SECURITY+");
        })
        .await;
}

proptest! {
    #[test]
    fn frames_keep_length_and_resolved_prefix(text in "[A-Za-z0-9 ]{1,24}", seed in any::<u64>()) {
        let mut scramble = Scramble::new(&text);
        let run = scramble.hover();
        let mut entropy = SeededEntropy::new(seed);
        let target: Vec<char> = text.chars().collect();
        let mut ticks = 0usize;

        loop {
            let more = scramble.tick(run, &mut entropy);
            let frame: Vec<char> = scramble.display().chars().collect();
            prop_assert_eq!(frame.len(), target.len());
            let resolved = ticks.div_ceil(2);
            prop_assert_eq!(&frame[..resolved.min(target.len())], &target[..resolved.min(target.len())]);
            for c in &frame[resolved.min(target.len())..] {
                prop_assert!(SCRAMBLE_ALPHABET.contains(c));
            }
            if !more {
                break;
            }
            ticks += 1;
        }

        prop_assert_eq!(scramble.display(), text.as_str());
        prop_assert_eq!(ticks, target.len() * 2);
    }
}
