use iced::font::Weight;
use iced::widget::{column, container, row, svg, text, Column};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::Wrap;

use super::assets;
use crate::result::{BinColor, BinEntry, Card};
use crate::Message;

const BIN_ICON_SIZE: f32 = 64.0;
const CHECK_ICON_SIZE: f32 = 24.0;

/// Label tint matching the bin icon
fn bin_tint(color: BinColor) -> Color {
    match color {
        BinColor::Blue => Color::from_rgb8(0x1E, 0x6F, 0xD9),
        BinColor::Green => Color::from_rgb8(0x2E, 0x9E, 0x4F),
        BinColor::Red => Color::from_rgb8(0xD6, 0x3B, 0x3B),
        BinColor::Yellow => Color::from_rgb8(0xE8, 0xB9, 0x1C),
        BinColor::Grey => Color::from_rgb8(0x8A, 0x8A, 0x8A),
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Wrap card content in the shared card chrome
fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn view_card(card_model: &Card) -> Element<'_, Message> {
    match card_model {
        Card::IdentifiedItem { name } => identified_item(name),
        Card::Bins { entries } => classified_bins(entries),
        Card::FunFact { text } => did_you_know(text),
    }
}

fn identified_item(name: &str) -> Element<'_, Message> {
    card(
        container(
            row![
                text("Identified Item:").size(20),
                text(name).size(20).font(bold()),
            ]
            .spacing(8),
        )
        .center_x(Length::Fill),
    )
}

fn classified_bins(entries: &[BinEntry]) -> Element<'_, Message> {
    let bins: Vec<Element<'_, Message>> = entries.iter().map(bin).collect();

    card(
        column![
            text("Throw in any of these bins:").size(20).font(bold()),
            Wrap::with_elements(bins).spacing(24.0),
        ]
        .spacing(16),
    )
}

fn bin(entry: &BinEntry) -> Element<'_, Message> {
    column![
        svg(svg::Handle::from_path(entry.color.icon_path()))
            .width(Length::Fixed(BIN_ICON_SIZE))
            .height(Length::Fixed(BIN_ICON_SIZE)),
        text(&entry.label).size(16).color(bin_tint(entry.color)),
        svg(svg::Handle::from_path(assets::CHECKED))
            .width(Length::Fixed(CHECK_ICON_SIZE))
            .height(Length::Fixed(CHECK_ICON_SIZE)),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .into()
}

fn did_you_know(fact: &str) -> Element<'_, Message> {
    card(
        column![
            container(text("Did you know?").size(20).font(bold())).center_x(Length::Fill),
            text(fact).size(16),
        ]
        .spacing(10),
    )
}

/// Bin icon with a "Loading..." heading
pub fn view_loading<'a>() -> Element<'a, Message> {
    let loader: Column<'a, Message> = column![
        svg(svg::Handle::from_path(assets::LOADING))
            .width(Length::Fixed(BIN_ICON_SIZE))
            .height(Length::Fixed(BIN_ICON_SIZE)),
        text("Loading...").size(18),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    loader.into()
}
