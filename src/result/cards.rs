/// Card models for a classification result
///
/// Building cards is pure: no widgets, no playground. The view layer turns
/// these into iced elements (see `ui::cards`).

use super::bins::{bin_color_for, BinColor};
use super::model::ClassificationResult;

/// One bin in the "throw in any of these bins" card
#[derive(Debug, Clone, PartialEq)]
pub struct BinEntry {
    pub label: String,
    pub color: BinColor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    /// "Identified Item: <name>"
    IdentifiedItem { name: String },
    /// The three applicable bins
    Bins { entries: Vec<BinEntry> },
    /// "Did you know?"
    FunFact { text: String },
}

/// Identified item, bins, fun fact, always in that order
pub fn build_cards(result: &ClassificationResult) -> Vec<Card> {
    // Every bin icon takes the color-coded category's color
    let color = bin_color_for(&result.color_sort);

    let entries = result
        .bins()
        .iter()
        .map(|label| BinEntry {
            label: label.to_string(),
            color,
        })
        .collect();

    vec![
        Card::IdentifiedItem {
            name: result.name.clone(),
        },
        Card::Bins { entries },
        Card::FunFact {
            text: result.fun_fact.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::model::banana_peel;

    #[test]
    fn test_banana_peel_cards() {
        let cards = build_cards(&banana_peel());
        assert_eq!(cards.len(), 3);

        assert_eq!(
            cards[0],
            Card::IdentifiedItem {
                name: "Banana Peel".to_string()
            }
        );

        let Card::Bins { entries } = &cards[1] else {
            panic!("second card should be the bins card");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Wet", "General Waste", "Organic"]);
        assert!(entries.iter().all(|e| e.color == BinColor::Green));

        assert!(matches!(&cards[2], Card::FunFact { text } if text.contains("Banana peels")));
    }

    #[test]
    fn test_hazardous_bins_are_yellow() {
        let mut result = banana_peel();
        result.color_sort = "HAZARDOUS".to_string();

        let cards = build_cards(&result);
        let Card::Bins { entries } = &cards[1] else {
            panic!("second card should be the bins card");
        };
        assert!(entries.iter().all(|e| e.color == BinColor::Yellow));
    }
}
