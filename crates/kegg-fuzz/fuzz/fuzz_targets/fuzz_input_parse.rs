#![no_main]

use kegg_mcp::models::{GetDrugInfoInput, ListPathwayDrugsInput, PathwayDrugTableInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<ListPathwayDrugsInput>(data);
    let _ = serde_json::from_slice::<GetDrugInfoInput>(data);
    let _ = serde_json::from_slice::<PathwayDrugTableInput>(data);
});
