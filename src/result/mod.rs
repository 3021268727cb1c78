/// Classification results and the cards built from them
///
/// - `model.rs` - the parsed result returned by the service
/// - `bins.rs` - color-sort to bin color lookup
/// - `cards.rs` - pure construction of the display cards

pub mod model;
pub mod bins;
pub mod cards;

pub use bins::BinColor;
pub use cards::{build_cards, BinEntry, Card};
pub use model::ClassificationResult;
