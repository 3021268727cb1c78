/// View layer: turns session state into iced widgets
///
/// - `assets.rs` - fixed relative paths of the bundled icons
/// - `cards.rs` - result cards and the loading indicator

pub mod assets;
pub mod cards;
