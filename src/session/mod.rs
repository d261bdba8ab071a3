//! Session state: the process-wide transcript accumulator.

mod session;

pub use session::TranscriptSession;
