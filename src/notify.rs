/// Blocking user notifications
///
/// Every error the user has to see goes through a `Notifier`. The app uses
/// native message dialogs; tests record the messages instead.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::{debug, info};

pub trait Notifier {
    /// Show a message and wait for the user to dismiss it
    fn alert(&self, message: &str);
}

/// Native OK-only warning dialog
#[derive(Debug, Clone, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        info!("🔔 Alert: {}", message);
        let choice = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Waste Sorter")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
        debug!("Alert dismissed: {:?}", choice);
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingNotifier;
