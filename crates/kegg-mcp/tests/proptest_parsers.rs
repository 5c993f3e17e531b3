//! Property-based tests for identifier validation and flat-file parsing.

use proptest::prelude::*;

use kegg_mcp::flatfile::{collect_targets, extract_drug_ids, parse_drug_record};
use kegg_mcp::models::{DrugId, NOT_FOUND, PathwayId};

proptest! {
    /// Well-formed pathway IDs are accepted unchanged.
    #[test]
    fn pathway_id_accepts_valid(code in "[a-z0-9]{1,12}") {
        let raw = format!("path:{code}");
        let id = PathwayId::parse(&raw).unwrap();
        prop_assert_eq!(id.as_str(), raw.as_str());
        prop_assert_eq!(id.code(), code.as_str());
    }

    /// Anything with a character outside `[a-z0-9]` after the prefix is rejected.
    #[test]
    fn pathway_id_rejects_other_chars(
        code in "[a-z0-9]{0,6}",
        bad in "[^a-z0-9]",
        tail in "[a-z0-9]{0,6}",
    ) {
        let raw = format!("path:{code}{bad}{tail}");
        prop_assert!(PathwayId::parse(&raw).is_err());
    }

    /// Loose input with a code inside normalizes to the strict form.
    #[test]
    fn pathway_normalize_finds_code(
        prefix in "[ (\\[]{0,3}",
        org in "[a-zA-Z]{3}",
        num in "[0-9]{5}",
        suffix in "[ )\\]]{0,3}",
    ) {
        let id = PathwayId::normalize(&format!("{prefix}{org}{num}{suffix}")).unwrap();
        prop_assert_eq!(id.as_str(), format!("path:{}{}", org.to_ascii_lowercase(), num));
        prop_assert!(PathwayId::parse(id.as_str()).is_ok());
    }

    /// Drug IDs are `D` followed by ASCII digits and nothing else.
    #[test]
    fn drug_id_shape(digits in "[0-9]{1,8}", junk in "[^0-9]") {
        let good = format!("D{digits}");
        prop_assert!(DrugId::parse(&good).is_ok());
        let with_junk = format!("{good}{junk}");
        let lowercase = format!("d{digits}");
        prop_assert!(DrugId::parse(&with_junk).is_err());
        prop_assert!(DrugId::parse(&lowercase).is_err());
    }

    /// The drug parser never panics and always echoes the ID.
    #[test]
    fn drug_parser_total(text in "\\PC{0,400}") {
        let lines: Vec<&str> = text.lines().collect();
        let record = parse_drug_record("D00001", &lines);
        prop_assert_eq!(record.drug_id, "D00001");
        prop_assert!(!record.name.is_empty() || text.contains("NAME"));
    }

    /// Every ID extracted from a DRUG block has the drug ID shape.
    #[test]
    fn extracted_ids_are_drug_ids(ids in prop::collection::vec("D[0-9]{5}", 1..10)) {
        let block = ids.join("\n            ");
        let text = format!("ENTRY       map00001\nDRUG        {block}\n///\n");
        let found = extract_drug_ids(&text);
        prop_assert_eq!(&found, &ids);
        for id in &found {
            prop_assert!(DrugId::parse(id).is_ok());
        }
    }

    /// TARGET collection ends at the first line in column 0.
    #[test]
    fn targets_stop_at_next_keyword(targets in prop::collection::vec("[A-Z0-9]{1,8}", 1..6)) {
        let mut lines = vec![format!("TARGET      {}", targets[0])];
        lines.extend(targets[1..].iter().map(|t| format!("            {t}")));
        lines.push("PATHWAY     hsa00590".to_string());
        lines.push("            ignored".to_string());

        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        prop_assert_eq!(collect_targets(&refs), targets);
    }
}

#[test]
fn empty_entry_defaults() {
    let record = parse_drug_record("D1", &[]);
    assert_eq!(record.name, NOT_FOUND);
    assert_eq!(record.class, NOT_FOUND);
    assert!(record.targets.is_empty());
}
