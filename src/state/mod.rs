/// State management module
///
/// This module handles all application state, without any widgets:
/// - The headless display area and its cards (playground.rs)
/// - The session controller owning the selected photo (session.rs)

pub mod playground;
pub mod session;

pub use playground::Node;
pub use session::Session;
