//! Contact slice: the form, the scripted "secure transmission" sequence played
//! while a message is sent, and the relay client that performs the one real POST.
//!
//! The sequence is a virtual-timeline state machine ([`Transmission`]) driven by
//! [`run_transmission`]; the relay sits behind [`FormRelay`] so tests and the
//! page can supply different transports.

#[cfg(feature = "client")]
mod client;
mod driver;
mod error;
mod form;
mod log;
mod model;
mod relay;

#[cfg(feature = "client")]
pub use crate::client::ContactPanel;
pub use crate::driver::run_transmission;
pub use crate::error::{TransmissionError, TransmissionErrorExt};
pub use crate::form::{ContactForm, ContactPayload, Field};
pub use crate::log::{LogBuffer, LogLine};
pub use crate::model::{Effect, Phase, Submit, Transmission};
pub use crate::relay::{FormRelay, HttpRelay, http_client};
