pub mod envelope;
pub mod response;

pub use envelope::{ResponseEnvelope, DEFAULT_SUCCESS_MESSAGE};
