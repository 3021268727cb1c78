/// Session controller
///
/// Owns the single selected photo and everything the handlers touch. Each
/// method corresponds to one UI event; async work (encoding, the network
/// call) happens outside and is fed back in through `photo_encoded` and
/// `finish_classification`.
///
/// Races the UI could otherwise produce are settled here:
/// - a second classification while one is in flight is ignored
/// - uploads are refused while a classification is in flight
/// - a conversion that lands while a classification is in flight is dropped,
///   so the cards always describe the photo on screen
/// - a conversion superseded by a newer upload is dropped on arrival

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::playground::{ActionArea, Playground};
use crate::classify::{ClassifyError, ClassifyRequest};
use crate::notify::Notifier;
use crate::photo::intake::{self, ChosenFile, IntakeError, MediaType, SelectedPhoto};
use crate::photo::Preview;
use crate::result::{build_cards, ClassificationResult};

/// The choose-photo control
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeControl {
    selection: Option<PathBuf>,
    visible: bool,
}

impl Default for IntakeControl {
    fn default() -> Self {
        Self {
            selection: None,
            visible: true,
        }
    }
}

impl IntakeControl {
    /// File currently shown as "selected"
    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A validated file waiting to be encoded
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub generation: u64,
    pub file: ChosenFile,
    pub media_type: MediaType,
}

#[derive(Debug)]
pub struct Session {
    photo: Option<SelectedPhoto>,
    intake: IntakeControl,
    preview: Preview,
    actions: ActionArea,
    playground: Playground,
    in_flight: bool,
    upload_generation: u64,
    prompt: String,
}

impl Session {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            photo: None,
            intake: IntakeControl::default(),
            preview: Preview::new(),
            actions: ActionArea::default(),
            playground: Playground::new(),
            in_flight: false,
            upload_generation: 0,
            prompt: prompt.into(),
        }
    }

    /// Handle the picker's answer
    ///
    /// Returns the upload to encode when the file passes validation.
    pub fn choose_file(&mut self, file: Option<ChosenFile>, notifier: &dyn Notifier) -> Option<PendingUpload> {
        let file = file?;

        if self.in_flight {
            warn!("⚠️  Ignoring {} while a classification is in flight", file.file_name());
            return None;
        }

        self.intake.selection = Some(file.path.clone());

        let media_type = match intake::validate(&file) {
            Ok(media_type) => media_type,
            Err(e) => {
                warn!("🚫 Rejected upload: {}", e);
                notifier.alert(&e.alert_message());
                self.intake.selection = None;
                return None;
            }
        };

        self.upload_generation += 1;
        debug!("Upload #{} accepted: {}", self.upload_generation, file.file_name());

        Some(PendingUpload {
            generation: self.upload_generation,
            file,
            media_type,
        })
    }

    /// Handle a finished conversion
    pub fn photo_encoded(
        &mut self,
        generation: u64,
        result: Result<SelectedPhoto, IntakeError>,
        notifier: &dyn Notifier,
    ) {
        if generation != self.upload_generation {
            debug!("Dropping stale upload #{} (latest is #{})", generation, self.upload_generation);
            return;
        }

        if self.in_flight {
            warn!("⚠️  Dropping upload #{} that finished during a classification", generation);
            return;
        }

        let photo = match result {
            Ok(photo) => photo,
            Err(e) => {
                warn!("⚠️  {}", e);
                notifier.alert(&e.alert_message());
                return;
            }
        };

        self.preview.show(&photo.data_url);
        self.intake.visible = false;
        self.actions.reveal();

        info!(
            "✅ Selected {} ({} bytes, {})",
            photo.file_name,
            photo.byte_len,
            photo.media_type.mime()
        );
        self.photo = Some(photo);
    }

    /// Start a classification of the selected photo
    ///
    /// Shows the loading indicator and clears any previous cards before
    /// handing back the request to send.
    pub fn begin_classification(&mut self, notifier: &dyn Notifier) -> Option<ClassifyRequest> {
        if self.in_flight {
            debug!("Classification already in flight, ignoring");
            return None;
        }

        let Some(photo) = &self.photo else {
            notifier.alert("Please upload a photo first.");
            return None;
        };

        let request = ClassifyRequest::new(photo, &self.prompt);

        self.actions.add_loading();
        self.playground.cleanup();
        self.in_flight = true;

        Some(request)
    }

    /// Settle the in-flight classification
    pub fn finish_classification(
        &mut self,
        outcome: Result<ClassificationResult, ClassifyError>,
        notifier: &dyn Notifier,
    ) {
        match outcome {
            Ok(result) => {
                info!("♻️  Identified {} ({})", result.name, result.color_sort);
                self.playground.mount(build_cards(&result));
                debug!("Mounted {} result cards", self.playground.card_count());
            }
            Err(e) => {
                warn!("⚠️  Classification failed: {}", e);
                notifier.alert(&e.alert_message());
            }
        }

        // Runs on every branch above
        self.actions.remove_loading();
        self.in_flight = false;
    }

    #[cfg(test)]
    pub fn photo(&self) -> Option<&SelectedPhoto> {
        self.photo.as_ref()
    }

    pub fn intake(&self) -> &IntakeControl {
        &self.intake
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn actions(&self) -> &ActionArea {
        &self.actions
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::client::ClassifyFuture;
    use crate::classify::envelope::parse_envelope;
    use crate::classify::Classifier;
    use crate::notify::RecordingNotifier;
    use crate::photo::intake::{encode_photo, to_data_url};
    use crate::result::{BinColor, Card};
    use std::io::Write;

    const BANANA: &str = r#"{"name":"Banana Peel","tri_sort":"Wet","common_sort":"General Waste","color_sort":"Organic","fun_fact":"..."}"#;

    fn envelope(inner: &str) -> String {
        serde_json::json!({ "result": inner }).to_string()
    }

    fn photo(bytes: &[u8]) -> SelectedPhoto {
        SelectedPhoto {
            data_url: to_data_url(MediaType::Png, bytes),
            file_name: "photo.png".to_string(),
            media_type: MediaType::Png,
            byte_len: bytes.len(),
        }
    }

    /// Session with one photo already selected
    fn ready_session(notifier: &RecordingNotifier) -> Session {
        let mut session = Session::new("prompt");
        let pending = session
            .choose_file(Some(ChosenFile::new("/photos/photo.png")), notifier)
            .unwrap();
        session.photo_encoded(pending.generation, Ok(photo(b"png")), notifier);
        session
    }

    #[test]
    fn test_no_file_is_noop() {
        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");

        assert!(session.choose_file(None, &notifier).is_none());
        assert_eq!(notifier.count(), 0);
        assert!(session.intake().is_visible());
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);
        let before = session.photo().cloned();

        for name in ["/photos/cat.gif", "/photos/scan.pdf", "/photos/pic.webp"] {
            assert!(session.choose_file(Some(ChosenFile::new(name)), &notifier).is_none());
            assert_eq!(session.photo().cloned(), before);
            assert!(session.intake().selection().is_none());
        }

        assert_eq!(notifier.messages(), vec!["Please upload a PNG or JPEG image."; 3]);
    }

    #[test]
    fn test_accepted_upload_updates_session() {
        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");

        let pending = session
            .choose_file(Some(ChosenFile::new("/photos/bottle.JPEG")), &notifier)
            .unwrap();
        assert_eq!(pending.media_type, MediaType::Jpeg);
        assert_eq!(session.intake().selection(), Some(Path::new("/photos/bottle.JPEG")));

        let encoded = photo(b"bottle");
        session.photo_encoded(pending.generation, Ok(encoded.clone()), &notifier);

        assert_eq!(session.photo(), Some(&encoded));
        assert!(!session.intake().is_visible());
        assert!(session.actions().is_visible());
        assert_eq!(session.preview().source(), Some(encoded.data_url.as_str()));
    }

    #[test]
    fn test_single_preview_across_uploads() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);

        let pending = session
            .choose_file(Some(ChosenFile::new("/photos/second.png")), &notifier)
            .unwrap();
        let second = photo(b"second");
        session.photo_encoded(pending.generation, Ok(second.clone()), &notifier);

        assert_eq!(session.preview().element_count(), 1);
        assert_eq!(session.preview().source(), Some(second.data_url.as_str()));
    }

    #[test]
    fn test_stale_conversion_is_dropped() {
        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");

        let first = session.choose_file(Some(ChosenFile::new("/a.png")), &notifier).unwrap();
        let second = session.choose_file(Some(ChosenFile::new("/b.png")), &notifier).unwrap();

        session.photo_encoded(second.generation, Ok(photo(b"b")), &notifier);
        session.photo_encoded(first.generation, Ok(photo(b"a")), &notifier);

        assert_eq!(session.photo(), Some(&photo(b"b")));
    }

    #[test]
    fn test_read_failure_alerts() {
        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");
        let pending = session.choose_file(Some(ChosenFile::new("/gone.png")), &notifier).unwrap();

        let err = IntakeError::Read {
            path: PathBuf::from("/gone.png"),
            source: std::sync::Arc::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        session.photo_encoded(pending.generation, Err(err), &notifier);

        assert!(session.photo().is_none());
        assert!(session.intake().is_visible());
        assert_eq!(notifier.count(), 1);
        assert!(notifier.messages()[0].starts_with("Could not read the selected photo"));
    }

    #[test]
    fn test_process_without_photo() {
        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");

        assert!(session.begin_classification(&notifier).is_none());
        assert!(!session.actions().has_loading());
        assert_eq!(notifier.messages(), vec!["Please upload a photo first."]);
    }

    #[test]
    fn test_begin_clears_previous_cards() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);

        session.begin_classification(&notifier).unwrap();
        session.finish_classification(parse_envelope(&envelope(BANANA)), &notifier);
        assert_eq!(session.playground().card_count(), 3);

        let request = session.begin_classification(&notifier).unwrap();
        assert_eq!(request.prompt, "prompt");
        assert_eq!(request.image_base64, photo(b"png").data_url);
        assert!(session.actions().has_loading());
        assert_eq!(session.playground().card_count(), 0);
        assert!(session.playground().has_intake());
    }

    #[test]
    fn test_double_click_is_ignored() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);

        assert!(session.begin_classification(&notifier).is_some());
        assert!(session.begin_classification(&notifier).is_none());
        assert!(session.is_in_flight());

        // Uploads are refused until the call settles
        assert!(session.choose_file(Some(ChosenFile::new("/c.png")), &notifier).is_none());
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn test_conversion_during_classification_is_dropped() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);
        let shown = photo(b"png");

        // B is picked before Process, but its conversion lands mid-call
        let pending = session
            .choose_file(Some(ChosenFile::new("/photos/b.png")), &notifier)
            .unwrap();
        let request = session.begin_classification(&notifier).unwrap();
        session.photo_encoded(pending.generation, Ok(photo(b"b")), &notifier);

        assert_eq!(request.image_base64, shown.data_url);
        assert_eq!(session.photo(), Some(&shown));
        assert_eq!(session.preview().source(), Some(shown.data_url.as_str()));

        session.finish_classification(parse_envelope(&envelope(BANANA)), &notifier);
        assert_eq!(session.photo(), Some(&shown));
        assert_eq!(notifier.count(), 0);
    }

    /// Loading indicator lifecycle on the success path and every failure path
    #[test]
    fn test_loading_removed_on_every_path() {
        let scenarios: Vec<(&str, Result<ClassificationResult, ClassifyError>, Option<&str>)> = vec![
            ("success", parse_envelope(&envelope(BANANA)), None),
            (
                "missing result",
                parse_envelope("{}"),
                Some("Failed to process the image. Try again!"),
            ),
            (
                "malformed payload",
                parse_envelope(&envelope("not json")),
                Some("Failed to process the image. Try again! "),
            ),
            (
                "unidentified",
                parse_envelope(&envelope(r#"{"error":true}"#)),
                Some("Server failed to identify the image"),
            ),
            (
                "non-JSON reply",
                parse_envelope("Internal Server Error"),
                Some("Failed to process image. Error occurred while calling the server."),
            ),
            (
                "network failure",
                Err(ClassifyError::Transport("connection refused".to_string())),
                Some("Failed to process image. Error occurred while calling the server."),
            ),
        ];

        for (label, outcome, alert) in scenarios {
            let notifier = RecordingNotifier::new();
            let mut session = ready_session(&notifier);

            session.begin_classification(&notifier).unwrap();
            assert!(session.actions().has_loading(), "{}: loading missing in flight", label);

            session.finish_classification(outcome, &notifier);
            assert!(!session.actions().has_loading(), "{}: loading left behind", label);
            assert!(!session.is_in_flight(), "{}: still in flight", label);
            assert!(session.playground().has_intake(), "{}: intake removed", label);

            match alert {
                None => {
                    assert_eq!(notifier.count(), 0, "{}", label);
                    assert_eq!(session.playground().card_count(), 3, "{}", label);
                }
                Some(prefix) => {
                    assert_eq!(notifier.count(), 1, "{}", label);
                    assert!(notifier.messages()[0].starts_with(prefix), "{}: {:?}", label, notifier.messages());
                    assert_eq!(session.playground().card_count(), 0, "{}", label);
                }
            }
        }
    }

    #[test]
    fn test_banana_peel_rendering() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);

        session.begin_classification(&notifier).unwrap();
        session.finish_classification(parse_envelope(&envelope(BANANA)), &notifier);

        let cards: Vec<&Card> = session.playground().cards().collect();
        assert!(matches!(cards[0], Card::IdentifiedItem { name } if name == "Banana Peel"));

        let Card::Bins { entries } = cards[1] else {
            panic!("expected bins card");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Wet", "General Waste", "Organic"]);
        assert!(entries.iter().all(|e| e.color == BinColor::Green));

        assert!(matches!(cards[2], Card::FunFact { text } if text == "..."));
    }

    #[test]
    fn test_failure_after_success_leaves_no_cards() {
        let notifier = RecordingNotifier::new();
        let mut session = ready_session(&notifier);

        session.begin_classification(&notifier).unwrap();
        session.finish_classification(parse_envelope(&envelope(BANANA)), &notifier);

        session.begin_classification(&notifier).unwrap();
        session.finish_classification(parse_envelope(&envelope(r#"{"error":true}"#)), &notifier);

        assert_eq!(session.playground().card_count(), 0);
        assert_eq!(session.playground().nodes().len(), 1);
    }

    /// Answers every request with the same canned body
    struct ScriptedClassifier {
        body: String,
    }

    impl Classifier for ScriptedClassifier {
        fn classify(&self, request: ClassifyRequest) -> ClassifyFuture {
            let body = self.body.clone();
            Box::pin(async move {
                assert!(request.image_base64.starts_with("data:image/png;base64,"));
                parse_envelope(&body)
            })
        }
    }

    #[tokio::test]
    async fn test_upload_then_classify_flow() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n").unwrap();

        let notifier = RecordingNotifier::new();
        let mut session = Session::new("prompt");
        let classifier = ScriptedClassifier {
            body: envelope(BANANA),
        };

        let pending = session
            .choose_file(Some(ChosenFile::new(file.path())), &notifier)
            .unwrap();
        let encoded = encode_photo(pending.file, pending.media_type).await;
        session.photo_encoded(pending.generation, encoded, &notifier);

        let request = session.begin_classification(&notifier).unwrap();
        let outcome = classifier.classify(request).await;
        session.finish_classification(outcome, &notifier);

        assert_eq!(notifier.count(), 0);
        assert_eq!(session.playground().card_count(), 3);
        assert!(!session.actions().has_loading());
    }
}
