#![no_main]

use kegg_mcp::flatfile::{extract_drug_ids, parse_drug_record};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for id in extract_drug_ids(text) {
            assert!(id.starts_with('D'));
        }

        let lines: Vec<&str> = text.lines().collect();
        let record = parse_drug_record("D00001", &lines);
        assert_eq!(record.drug_id, "D00001");
    }
});
