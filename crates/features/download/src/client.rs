use crate::driver::{ResumeSink, run_download};
use crate::error::{DownloadError, DownloadErrorExt};
use crate::model::{DownloadModel, DownloadPhase, ResumeAsset};
use dioxus::prelude::*;
use folio_kernel::prelude::SiteConfig;

const RESUME_PDF: Asset = asset!("/assets/resume.pdf");

const DOWNLOAD_SCRIPT: &str = r"
    const [href, name] = await dioxus.recv();
    const link = document.createElement('a');
    link.href = href;
    link.download = name;
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
";

/// Starts the download through a temporary anchor element in the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSink;

impl ResumeSink for BrowserSink {
    fn deliver(&mut self, asset: &ResumeAsset) -> Result<(), DownloadError> {
        let sent = document::eval(DOWNLOAD_SCRIPT)
            .send((asset.href.as_str(), asset.file_name.as_str()))
            .map_err(|e| DownloadError::Delivery { message: e.to_string().into(), context: None });
        DownloadErrorExt::context(sent, "Clicking download anchor")
    }
}

#[component]
pub fn ResumeButton(#[props(default)] class: String) -> Element {
    let config = use_context::<SiteConfig>();
    let model = use_signal(|| DownloadModel::new(&config.resume));
    let asset = use_hook(|| ResumeAsset::resolve(&config.resume, RESUME_PDF.to_string()));

    let current = model.read();
    let icon = match current.phase() {
        DownloadPhase::Idle => "⤓",
        DownloadPhase::Preparing => "◌",
        DownloadPhase::Saved => "✓",
    };

    rsx! {
        button {
            class: "resume-button {class}",
            "data-phase": current.phase().as_str(),
            disabled: current.is_busy(),
            onclick: move |_| {
                let asset = asset.clone();
                let mut model = model;
                spawn(async move {
                    run_download(&mut model, &mut BrowserSink, &asset).await;
                });
            },
            span { class: "resume-button__icon", "{icon}" }
            span { {current.label()} }
        }
    }
}
