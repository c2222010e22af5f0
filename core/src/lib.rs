//! Request workflow behind the Studio form: the backend contract, the
//! submit/resolve state machine and the transports that talk to the
//! generation service.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod studio;

#[cfg(feature = "native")]
pub mod http_backend;

pub use client::{generate, warm_up, GenerationBackend, HELLO_ENDPOINT};
pub use config::StudioConfig;
pub use error::{GenerationError, FAILURE_NOTE};
pub use models::{GenerationRequest, GenerationResponse, Mode, ResultSet};
pub use studio::{Studio, StudioAction, StudioState, Submission, Ticket, TicketSource};

#[cfg(feature = "native")]
pub use http_backend::HttpBackend;
