pub mod card;

pub use card::Card;

use crate::catalog::Record;

/// Holds the cards currently on display. Every render replaces the whole
/// content; an empty record list leaves the container empty.
#[derive(Debug, Default)]
pub struct CardContainer {
    cards: Vec<Card>,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, records: &[Record]) {
        self.cards.clear();
        self.cards.extend(records.iter().map(Card::from));
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter;
    use crate::catalog::record::Year;

    fn dataset() -> Vec<Record> {
        vec![
            Record::new(
                "Inception",
                Some(Year::Number(2010u64.into())),
                "A mind-bending heist",
                Some("http://x"),
            ),
            Record::new("Matrix", Some(Year::Text("1999".into())), "Simulation", None),
        ]
    }

    #[test]
    fn one_card_per_record_in_order() {
        let mut container = CardContainer::new();

        container.render(&dataset());

        assert_eq!(container.cards().len(), 2);
        assert_eq!(container.cards()[0].heading, "Inception");
        assert_eq!(container.cards()[1].heading, "Matrix");
    }

    #[test]
    fn render_replaces_previous_cards() {
        let mut container = CardContainer::new();
        container.render(&dataset());

        container.render(&dataset()[1..]);

        assert_eq!(container.cards().len(), 1);
        assert_eq!(container.cards()[0].heading, "Matrix");
    }

    #[test]
    fn empty_render_clears_container() {
        let mut container = CardContainer::new();
        container.render(&dataset());

        container.render(&[]);

        assert!(container.is_empty());
    }

    #[test]
    fn filtered_search_renders_matching_card() {
        let mut container = CardContainer::new();

        container.render(&filter(&dataset(), "mind"));
        assert_eq!(container.cards().len(), 1);
        assert_eq!(container.cards()[0].heading, "Inception");

        container.render(&filter(&dataset(), "ZZZ"));
        assert!(container.is_empty());

        container.render(&filter(&[], "mind"));
        assert!(container.is_empty());
    }
}
