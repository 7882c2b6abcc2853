use super::Record;

/// Returns the records whose name or description contains `query`,
/// ignoring case, in dataset order. An empty query keeps everything.
pub fn filter(dataset: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return dataset.to_vec();
    }

    let query_lower = query.to_lowercase();
    dataset
        .iter()
        .filter(|record| record.matches(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::Year;

    fn inception() -> Record {
        Record::new(
            "Inception",
            Some(Year::Number(2010u64.into())),
            "A mind-bending heist",
            Some("http://x"),
        )
    }

    fn matrix() -> Record {
        Record::new(
            "Matrix",
            Some(Year::Number(1999u64.into())),
            "Reality is a simulation",
            Some("https://example.com/matrix"),
        )
    }

    #[test]
    fn finds_match_in_description() {
        let dataset = vec![inception()];

        let results = filter(&dataset, "mind");

        assert_eq!(results, vec![inception()]);
    }

    #[test]
    fn no_match_returns_empty() {
        let dataset = vec![inception()];

        assert!(filter(&dataset, "ZZZ").is_empty());
    }

    #[test]
    fn description_only_match_is_selected() {
        let dataset = vec![matrix(), inception()];

        let results = filter(&dataset, "heist");

        assert_eq!(results, vec![inception()]);
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let dataset = vec![matrix(), inception()];

        assert_eq!(filter(&dataset, ""), dataset);
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        assert!(filter(&[], "anything").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn query_case_is_ignored_and_output_casing_kept() {
        let dataset = vec![matrix()];

        let results = filter(&dataset, "MaTrIx");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Matrix");
    }

    #[test]
    fn matches_follow_substring_rule_and_keep_order() {
        let dataset = vec![
            Record::new("Alpha", None, "first", None),
            Record::new("Beta", None, "contains ALPHA too", None),
            Record::new("Gamma", None, "third", None),
            Record::new("alphabet", None, "fourth", None),
        ];

        for query in ["alpha", "a", "th", "", "zeta", "PHA"] {
            let results = filter(&dataset, query);
            let needle = query.to_lowercase();

            let expected: Vec<Record> = dataset
                .iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(&needle)
                        || r.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            assert_eq!(results, expected, "query {:?}", query);

            let mut positions = results
                .iter()
                .map(|r| dataset.iter().position(|d| d == r).unwrap());
            let mut last = None;
            for pos in &mut positions {
                assert!(last.map_or(true, |l| pos > l));
                last = Some(pos);
            }
        }
    }
}
