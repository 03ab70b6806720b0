#![no_main]

use libfuzzer_sys::fuzz_target;
use stackwright::domain::services::PatchOp;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let ops = [
        PatchOp::ensure_import("import tailwindcss from \"@tailwindcss/vite\";"),
        PatchOp::insert_array_entry("plugins", "tailwindcss()"),
        PatchOp::json_set_if_absent(&["compilerOptions", "strict"], serde_json::json!(true)),
        PatchOp::append_line_if_absent("node_modules"),
    ];
    for op in &ops {
        // Applying twice must equal applying once
        if let Ok(once) = op.patched(content) {
            let twice = op.patched(&once).ok();
            assert_eq!(twice.as_deref(), Some(once.as_str()));
        }
    }
});
