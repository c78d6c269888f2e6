//! Resume download slice.
//!
//! The button walks `Idle → Preparing → Saved → Idle` on a virtual timeline:
//! the browser download is handed to a [`ResumeSink`] once per cycle, and the
//! "saved" confirmation lingers before the button resets.
//!
//! ```rust
//! use folio_download::{DownloadModel, DownloadPhase, Step, Trigger};
//! use folio_domain::config::ResumeConfig;
//! use std::time::Duration;
//!
//! let mut model = DownloadModel::new(&ResumeConfig::default());
//! assert_eq!(model.trigger(Duration::ZERO), Trigger::Started);
//! assert_eq!(model.trigger(Duration::ZERO), Trigger::Ignored);
//!
//! let deadline = model.next_deadline().unwrap();
//! assert_eq!(model.advance(deadline), Some(Step::Deliver));
//! assert_eq!(model.phase(), DownloadPhase::Saved);
//! ```

#[cfg(feature = "client")]
mod client;
mod driver;
mod error;
mod model;

#[cfg(feature = "client")]
pub use crate::client::{BrowserSink, ResumeButton};
pub use crate::driver::{ResumeSink, run_download};
pub use crate::error::{DownloadError, DownloadErrorExt};
pub use crate::model::{DownloadModel, DownloadPhase, ResumeAsset, Step, Trigger};
