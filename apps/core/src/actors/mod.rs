//! Session actor: serializes explanation requests and owns the current result.

pub mod messages;
pub mod session;

pub use messages::{ExplainOutcome, SessionMessage};
pub use session::SessionHandle;
