use folio_domain::config::ResumeConfig;
use folio_download::{
    DownloadError, DownloadModel, DownloadPhase, ResumeAsset, ResumeSink, Trigger, run_download,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Default)]
struct RecordingSink {
    delivered: Vec<ResumeAsset>,
    fail: bool,
}

impl ResumeSink for RecordingSink {
    fn deliver(&mut self, asset: &ResumeAsset) -> Result<(), DownloadError> {
        self.delivered.push(asset.clone());
        if self.fail {
            return Err(DownloadError::Delivery { message: "blocked".into(), context: None });
        }
        Ok(())
    }
}

const BUNDLED: &str = "/assets/resume.pdf";
const SHIPPED_RESUME: &[u8] = include_bytes!("../assets/resume.pdf");

fn setup() -> (Rc<RefCell<DownloadModel>>, ResumeAsset) {
    let config = ResumeConfig::default();
    (Rc::new(RefCell::new(DownloadModel::new(&config))), ResumeAsset::resolve(&config, BUNDLED))
}

#[tokio::test(start_paused = true)]
async fn cycle_delivers_once_and_resets_after_linger() {
    let (mut state, asset) = setup();
    let mut sink = RecordingSink::default();
    let start = Instant::now();

    let outcome = run_download(&mut state, &mut sink, &asset).await;

    assert_eq!(outcome, Trigger::Started);
    assert_eq!(sink.delivered, vec![asset]);
    assert_eq!(start.elapsed(), Duration::from_millis(4_500));
    assert_eq!(state.borrow().phase(), DownloadPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn sink_failure_still_completes_cycle() {
    let (mut state, asset) = setup();
    let mut sink = RecordingSink { fail: true, ..RecordingSink::default() };

    run_download(&mut state, &mut sink, &asset).await;

    assert_eq!(sink.delivered.len(), 1);
    assert_eq!(state.borrow().phase(), DownloadPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn press_during_cycle_is_ignored() {
    let (mut state, asset) = setup();
    state.borrow_mut().trigger(Duration::ZERO);
    let mut sink = RecordingSink::default();
    let start = Instant::now();

    let outcome = run_download(&mut state, &mut sink, &asset).await;

    assert_eq!(outcome, Trigger::Ignored);
    assert!(sink.delivered.is_empty());
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(state.borrow().phase(), DownloadPhase::Preparing);
}

#[test]
fn bundled_file_is_used_without_override() {
    let config = ResumeConfig { file_name: "cv.pdf".to_owned(), ..ResumeConfig::default() };
    let asset = ResumeAsset::resolve(&config, BUNDLED);
    assert_eq!(asset.href, BUNDLED);
    assert_eq!(asset.file_name, "cv.pdf");
}

#[test]
fn configured_href_overrides_bundled_file() {
    let config = ResumeConfig {
        href: Some("https://cdn.example.com/cv.pdf".to_owned()),
        ..ResumeConfig::default()
    };
    let asset = ResumeAsset::resolve(&config, BUNDLED);
    assert_eq!(asset.href, "https://cdn.example.com/cv.pdf");
}

#[test]
fn bundled_resume_is_a_pdf() {
    assert!(SHIPPED_RESUME.starts_with(b"%PDF-"));
    assert!(SHIPPED_RESUME.trim_ascii_end().ends_with(b"%%EOF"));
}
