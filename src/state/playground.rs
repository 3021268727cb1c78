/// Headless model of the display area
///
/// The display area is an ordered list of nodes. The intake node is created
/// with the playground and survives every cleanup; result cards come and go.

use crate::result::Card;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The choose-photo card (header, preview and actions)
    Intake,
    /// A rendered result card
    Card(Card),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playground {
    nodes: Vec<Node>,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            nodes: vec![Node::Intake],
        }
    }
}

impl Playground {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every result card, keeping the intake node
    pub fn cleanup(&mut self) {
        self.nodes.retain(|node| !matches!(node, Node::Card(_)));
    }

    /// Replace any previous result with `cards`, appended in order
    pub fn mount(&mut self, cards: Vec<Card>) {
        self.cleanup();
        self.nodes.extend(cards.into_iter().map(Node::Card));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            Node::Intake => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    #[cfg(test)]
    pub fn has_intake(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Intake))
    }
}

/// The Retake / Process controls and their loading indicator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionArea {
    visible: bool,
    loading: bool,
}

impl ActionArea {
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the loading indicator (at most one at a time)
    pub fn add_loading(&mut self) {
        self.loading = true;
    }

    /// Remove the loading indicator; no-op when none is showing
    pub fn remove_loading(&mut self) {
        self.loading = false;
    }

    pub fn has_loading(&self) -> bool {
        self.loading
    }
}
