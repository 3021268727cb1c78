/// Preview of the selected photo
///
/// There is only ever one preview. A new upload replaces the image in place
/// instead of stacking another one under the intake header.

use iced::widget::image::Handle;
use tracing::warn;

use super::intake::decode_data_url;

#[derive(Debug, Clone, Default)]
pub struct Preview {
    handle: Option<Handle>,
    source: Option<String>,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a data-URL, replacing whatever was previewed before
    pub fn show(&mut self, data_url: &str) {
        let Some(bytes) = decode_data_url(data_url) else {
            warn!("⚠️  Preview skipped: not a base64 data-URL");
            return;
        };

        self.handle = Some(Handle::from_bytes(bytes));
        self.source = Some(data_url.to_string());
    }

    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// The data-URL currently on screen
    #[cfg(test)]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[cfg(test)]
    pub fn is_shown(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of preview images on screen (0 or 1)
    #[cfg(test)]
    pub fn element_count(&self) -> usize {
        usize::from(self.is_shown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::intake::{to_data_url, MediaType};

    #[test]
    fn test_replaces_in_place() {
        let mut preview = Preview::new();
        assert_eq!(preview.element_count(), 0);

        let first = to_data_url(MediaType::Png, b"first");
        let second = to_data_url(MediaType::Jpeg, b"second");

        preview.show(&first);
        preview.show(&second);

        assert_eq!(preview.element_count(), 1);
        assert_eq!(preview.source(), Some(second.as_str()));
    }

    #[test]
    fn test_bad_url_keeps_previous() {
        let mut preview = Preview::new();
        let good = to_data_url(MediaType::Png, b"ok");
        preview.show(&good);
        preview.show("not a data url");

        assert_eq!(preview.source(), Some(good.as_str()));
    }
}
