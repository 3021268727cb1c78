/// Classification client
///
/// - `prompt.rs` - the fixed instruction prompt sent with every photo
/// - `envelope.rs` - request body and two-layer response parsing
/// - `client.rs` - the HTTP call and the `Classifier` seam

pub mod prompt;
pub mod envelope;
pub mod client;

pub use client::{Classifier, HttpClassifier};
pub use envelope::{ClassifyError, ClassifyRequest};
