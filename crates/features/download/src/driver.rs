use crate::error::DownloadError;
use crate::model::{DownloadModel, ResumeAsset, Step, Trigger};
use folio_kernel::prelude::{StateCell, sleep_until};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Platform hook that actually starts the file download.
pub trait ResumeSink {
    /// # Errors
    /// Returns [`DownloadError::Delivery`] when the platform refuses the download.
    fn deliver(&mut self, asset: &ResumeAsset) -> Result<(), DownloadError>;
}

/// Runs one download cycle to completion.
///
/// A press while a cycle is running returns [`Trigger::Ignored`] without touching the
/// state. A failing sink is logged and the cycle still runs to its reset.
pub async fn run_download<S, K>(state: &mut S, sink: &mut K, asset: &ResumeAsset) -> Trigger
where
    S: StateCell<DownloadModel>,
    K: ResumeSink + ?Sized,
{
    let mut now = Duration::ZERO;
    if state.update(|model| model.trigger(now)) == Trigger::Ignored {
        debug!("Download already in progress");
        return Trigger::Ignored;
    }
    info!(file = %asset.file_name, "Preparing resume download");

    while let Some(deadline) = state.read_with(DownloadModel::next_deadline) {
        now = sleep_until(now, deadline).await;
        match state.update(|model| model.advance(now)) {
            Some(Step::Deliver) => match sink.deliver(asset) {
                Ok(()) => info!(href = %asset.href, "Resume handed to the browser"),
                Err(error) => warn!(%error, kind = error.kind(), "Resume download failed"),
            },
            Some(Step::Reset) => debug!("Download button reset"),
            None => {}
        }
    }

    Trigger::Started
}
