use crate::catalog::Record;

pub const LINK_LABEL: &str = "Learn more";

/// What one card shows. Fields are plain text; nothing is interpreted as
/// markup when drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub heading: String,
    pub year: String,
    pub description: String,
    /// Only set for http(s) links.
    pub link: Option<String>,
}

impl From<&Record> for Card {
    fn from(record: &Record) -> Self {
        Self {
            heading: record.name.clone(),
            year: record
                .year
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            description: record.description.clone(),
            link: record.link.as_deref().and_then(outbound_link),
        }
    }
}

/// Accepts a link only when it is an absolute http or https URL.
pub fn outbound_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    let (scheme, rest) = link.split_once("://")?;

    if !(scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")) {
        log::debug!("Dropping link with unsupported scheme: {}", link);
        return None;
    }
    if rest.is_empty() || link.chars().any(char::is_whitespace) {
        return None;
    }

    Some(link.to_string())
}
