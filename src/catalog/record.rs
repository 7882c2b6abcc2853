use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry, as stored in the dataset file.
///
/// `name` and `description` are required text; a record without them fails
/// to deserialize and takes the whole load down with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ano", default)]
    pub year: Option<Year>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Display-only year. Datasets write it both as `2010` and `"2010"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

impl Record {
    /// Case-insensitive substring match on name or description.
    /// `query_lower` must already be lower-cased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
impl Record {
    pub fn new(name: &str, year: Option<Year>, description: &str, link: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            year,
            description: description.to_string(),
            link: link.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_portuguese_keys() {
        let record: Record = serde_json::from_str(
            r#"{"nome": "Inception", "ano": 2010, "descricao": "A mind-bending heist", "link": "http://x"}"#,
        )
        .unwrap();

        assert_eq!(record.name, "Inception");
        assert_eq!(record.description, "A mind-bending heist");
        assert_eq!(record.link.as_deref(), Some("http://x"));
        assert_eq!(record.year.unwrap().to_string(), "2010");
    }

    #[test]
    fn year_may_be_text() {
        let record: Record =
            serde_json::from_str(r#"{"nome": "Alien", "ano": "1979", "descricao": "In space"}"#).unwrap();

        assert_eq!(record.year, Some(Year::Text("1979".into())));
        assert!(record.link.is_none());
    }

    #[test]
    fn name_and_description_are_required() {
        assert!(serde_json::from_str::<Record>(r#"{"ano": 1999, "descricao": "x"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"nome": "Matrix", "ano": 1999}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"nome": 12, "descricao": "x"}"#).is_err());
    }

    #[test]
    fn matching_ignores_case() {
        let record = Record::new("The Matrix", None, "Neo wakes up", None);

        assert!(record.matches("matrix"));
        assert!(record.matches("neo wakes"));
        assert!(!record.matches("heist"));
    }
}
