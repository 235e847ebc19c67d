use crate::types::{Address, MessageKind, UniqueAddressSet};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Field labels whose values are account addresses, one entry per distinct label
/// across every [`MessageKind`].
pub fn address_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    for kind in MessageKind::ALL {
        for &label in kind.address_fields() {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

lazy_static! {
    // Exact shape of the indexer's JSON encoder: no whitespace around the colon,
    // and only non-empty lowercase alphanumeric values.
    static ref ADDRESS_PATTERNS: Vec<(&'static str, Regex)> = address_labels()
        .into_iter()
        .map(|label| {
            let pattern = format!(r#""{}":"([a-z0-9]+)""#, regex::escape(label));
            (label, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Scans `text` for every `"<label>":"<value>"` pair and returns the distinct values.
///
/// This never fails: text with no matches (including empty or malformed text) yields
/// an empty set.
pub fn extract_addresses(text: &str) -> UniqueAddressSet {
    extract_with_counts(text).0
}

/// Same as [`extract_addresses`], also returning how many matches each label produced
/// before deduplication.
pub fn extract_with_counts(text: &str) -> (UniqueAddressSet, BTreeMap<&'static str, usize>) {
    let mut addresses = UniqueAddressSet::new();
    let mut counts = BTreeMap::new();

    for (label, pattern) in ADDRESS_PATTERNS.iter() {
        let mut matched = 0;
        for captures in pattern.captures_iter(text) {
            if let Some(value) = captures.get(1) {
                addresses.insert(Address::new(value.as_str()));
                matched += 1;
            }
        }
        debug!("Matched {} `{}` values", matched, label);
        counts.insert(*label, matched);
    }

    (addresses, counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(values: &[&str]) -> UniqueAddressSet {
        values.iter().map(|v| Address::from(*v)).collect()
    }

    #[test]
    fn scans_each_address_label_once() {
        assert_eq!(
            address_labels(),
            vec!["from_address", "to_address", "caller", "creator"]
        );
    }

    #[test]
    fn extracts_single_caller() {
        let text = r#"{"messages":[{"value":{"caller":"g1abc123"}}]}"#;
        assert_eq!(extract_addresses(text), set(&["g1abc123"]));
    }

    #[test]
    fn duplicate_values_collapse() {
        let text = r#"{"data":{"getTransactions":[
            {"block_height":1,"messages":[{"value":{"__typename":"BankMsgSend","from_address":"g1aaa","to_address":"g1bbb","amount":"1ugnot"}}]},
            {"block_height":2,"messages":[{"value":{"__typename":"BankMsgSend","from_address":"g1aaa","to_address":"g1bbb","amount":"2ugnot"}}]}
        ]}}"#;
        let (addresses, counts) = extract_with_counts(text);
        assert_eq!(addresses, set(&["g1aaa", "g1bbb"]));
        assert_eq!(counts["from_address"], 2);
        assert_eq!(counts["to_address"], 2);
        assert_eq!(counts["caller"], 0);
    }

    #[test]
    fn same_value_under_different_labels_counts_once() {
        let text = r#"[{"caller":"g1same"},{"creator":"g1same"},{"to_address":"g1same"}]"#;
        assert_eq!(extract_addresses(text), set(&["g1same"]));
    }

    #[test]
    fn matches_regardless_of_nesting() {
        let text = r#"{"a":{"b":{"c":[[{"creator":"g1deep"}]]}},"caller":"g1top"}"#;
        assert_eq!(extract_addresses(text), set(&["g1deep", "g1top"]));
    }

    #[test]
    fn text_without_labels_is_empty() {
        assert!(extract_addresses("").is_empty());
        assert!(extract_addresses("not json at all {{{").is_empty());
        assert!(extract_addresses(r#"{"data":{"getTransactions":[]}}"#).is_empty());
    }

    #[test]
    fn whitespace_and_case_are_not_tolerated() {
        let text = r#"{"caller": "g1spaced","Caller":"g1upper","creator" :"g1before","caller":"G1MIXED"}"#;
        assert!(extract_addresses(text).is_empty());
    }

    #[test]
    fn empty_value_is_filtered() {
        let text = r#"{"creator":"","caller":"g1real"}"#;
        assert_eq!(extract_addresses(text), set(&["g1real"]));
    }

    #[test]
    fn value_stops_at_first_non_matching_char() {
        // the closing quote has to follow the value directly
        let text = r#"{"caller":"g1abc-def","from_address":"g1ok"}"#;
        assert_eq!(extract_addresses(text), set(&["g1ok"]));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = r#"{"caller":"g1x","from_address":"g1y","to_address":"g1z","creator":"g1x"}"#;
        let first = extract_addresses(text);
        let second = extract_addresses(text);
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn pattern_order_does_not_matter() {
        let text = r#"{"caller":"g1x","from_address":"g1y","to_address":"g1z","creator":"g1w","caller":"g1y"}"#;
        let forward = extract_addresses(text);

        let mut reversed = UniqueAddressSet::new();
        for (_, pattern) in ADDRESS_PATTERNS.iter().rev() {
            for captures in pattern.captures_iter(text) {
                reversed.insert(Address::new(&captures[1]));
            }
        }
        assert_eq!(forward, reversed);
    }
}
