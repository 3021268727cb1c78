/// Photo intake module
///
/// This module handles:
/// - Validating the declared media type of a chosen file
/// - Encoding the file bytes as a base64 data-URL
/// - Holding the single on-screen preview

pub mod intake;
pub mod preview;

pub use intake::{ChosenFile, IntakeError, SelectedPhoto};
pub use preview::Preview;
