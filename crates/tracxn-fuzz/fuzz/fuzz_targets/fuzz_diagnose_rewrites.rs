#![no_main]

use libfuzzer_sys::fuzz_target;
use tracxn_mcp::tools::diagnostics;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) {
        let before = body.clone();
        let _ = diagnostics::candidates(&body);
        // Rewrites work on copies
        assert_eq!(body, before);
    }
});
