pub mod cards;
pub mod search_bar;
pub mod status;

pub use cards::show_cards;
pub use search_bar::SearchBarState;
pub use status::Status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Search(String),
    CopyLink(String),
}
