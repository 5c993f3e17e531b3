#![no_main]

use kegg_mcp::models::{DrugId, PathwayId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = DrugId::parse(raw);
        let _ = PathwayId::parse(raw);

        // Whatever normalization produces must pass strict validation
        if let Ok(id) = PathwayId::normalize(raw) {
            assert!(PathwayId::parse(id.as_str()).is_ok());
        }
    }
});
