#![no_main]

use libfuzzer_sys::fuzz_target;
use tracxn_mcp::tools::{ToolCall, ToolKind};

fuzz_target!(|data: &[u8]| {
    // Decoding arguments must yield a call or a ToolError, never a panic
    if let Ok(arguments) = serde_json::from_slice::<serde_json::Value>(data) {
        for kind in ToolKind::ALL {
            let _ = ToolCall::parse(kind.name(), arguments.clone());
        }
    }
});
