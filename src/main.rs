use iced::widget::{button, column, container, image, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod classify;
mod config;
mod notify;
mod photo;
mod result;
mod state;
mod ui;

use classify::{Classifier, ClassifyError, HttpClassifier};
use config::Config;
use notify::DialogNotifier;
use photo::intake::encode_photo;
use photo::{ChosenFile, IntakeError, SelectedPhoto};
use result::ClassificationResult;
use state::{Node, Session};

const PREVIEW_WIDTH: f32 = 360.0;

/// Main application state
struct WasteSorter {
    session: Session,
    /// Sends photos to the classification service
    classifier: Arc<dyn Classifier>,
    notifier: DialogNotifier,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the choose-photo header or "Retake"
    ChoosePhoto,
    /// Background encoding of upload #n completed
    PhotoEncoded(u64, Result<SelectedPhoto, IntakeError>),
    /// User clicked "Process"
    ProcessPhoto,
    /// The classification call settled
    Classified(Result<ClassificationResult, ClassifyError>),
}

impl WasteSorter {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let classifier = HttpClassifier::new(config.endpoint.clone(), config.request_timeout);

        tracing::info!("♻️  Waste Sorter ready");

        (
            WasteSorter {
                session: Session::new(config.prompt),
                classifier: Arc::new(classifier),
                notifier: DialogNotifier,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChoosePhoto => {
                // Show the native file picker; the filter is a convenience,
                // the session still validates whatever comes back
                let file = FileDialog::new()
                    .set_title("Choose a photo of your waste")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file()
                    .map(ChosenFile::new);

                match self.session.choose_file(file, &self.notifier) {
                    Some(pending) => {
                        let generation = pending.generation;
                        Task::perform(
                            encode_photo(pending.file, pending.media_type),
                            move |result| Message::PhotoEncoded(generation, result),
                        )
                    }
                    None => Task::none(),
                }
            }
            Message::PhotoEncoded(generation, result) => {
                self.session.photo_encoded(generation, result, &self.notifier);
                Task::none()
            }
            Message::ProcessPhoto => match self.session.begin_classification(&self.notifier) {
                Some(request) => Task::perform(self.classifier.classify(request), Message::Classified),
                None => Task::none(),
            },
            Message::Classified(outcome) => {
                self.session.finish_classification(outcome, &self.notifier);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let nodes: Vec<Element<'_, Message>> = self
            .session
            .playground()
            .nodes()
            .iter()
            .map(|node| match node {
                Node::Intake => self.view_intake(),
                Node::Card(card) => ui::cards::view_card(card),
            })
            .collect();

        let content = Column::with_children(nodes)
            .spacing(20)
            .padding(40)
            .max_width(720.0)
            .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// The choose-photo card: header, preview and actions
    fn view_intake(&self) -> Element<'_, Message> {
        let session = &self.session;
        let idle = !session.is_in_flight();
        let mut intake: Column<Message> = column![text("Waste Sorter").size(40)]
            .spacing(16)
            .align_x(Alignment::Center);

        if session.intake().is_visible() {
            let label = match session.intake().selection() {
                Some(path) => format!("Selected: {}", path.display()),
                None => "📷 Choose a photo".to_string(),
            };
            intake = intake.push(
                button(text(label).size(18))
                    .on_press(Message::ChoosePhoto)
                    .padding(16),
            );
        }

        if let Some(handle) = session.preview().handle() {
            intake = intake.push(image(handle.clone()).width(Length::Fixed(PREVIEW_WIDTH)));
        }

        if session.actions().is_visible() {
            let actions = row![
                button("Retake")
                    .on_press_maybe(idle.then_some(Message::ChoosePhoto))
                    .padding(10),
                button("Process")
                    .on_press_maybe(idle.then_some(Message::ProcessPhoto))
                    .padding(10),
            ]
            .spacing(12);
            intake = intake.push(actions);

            if session.actions().has_loading() {
                intake = intake.push(ui::cards::view_loading());
            }
        }

        container(intake)
            .padding(20)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waste_sorter=info")),
        )
        .init();

    iced::application("Waste Sorter", WasteSorter::update, WasteSorter::view)
        .theme(WasteSorter::theme)
        .centered()
        .run_with(WasteSorter::new)
}
