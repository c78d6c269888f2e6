use crate::model::{Effect, Submit, Transmission};
use crate::relay::FormRelay;
use folio_kernel::prelude::{Entropy, StateCell, sleep_until};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Plays one transmission sequence from submit to the return to idle.
///
/// The relay is called exactly once, when the upload animation completes. A relay
/// failure sends the form straight back to idle with its values intact.
pub async fn run_transmission<S, R, E>(state: &mut S, relay: &R, entropy: &mut E) -> Submit
where
    S: StateCell<Transmission>,
    R: FormRelay + ?Sized,
    E: Entropy + ?Sized,
{
    let mut now = Duration::ZERO;
    let outcome = state.update(|t| t.submit(now));
    if outcome != Submit::Accepted {
        debug!(?outcome, "Transmission not started");
        return outcome;
    }
    info!("Transmission sequence started");

    while let Some(deadline) = state.read_with(Transmission::next_deadline) {
        now = sleep_until(now, deadline).await;
        let Some(Effect::Post(payload)) = state.update(|t| t.advance(now, entropy)) else {
            continue;
        };

        let result = relay.post(&payload).await;
        match &result {
            Ok(()) => info!(phase = %state.read_with(Transmission::phase), "Contact payload delivered"),
            Err(error) => warn!(%error, kind = error.kind(), "Contact relay failed"),
        }
        state.update(|t| t.settle(now, result.is_ok()));
    }

    outcome
}
