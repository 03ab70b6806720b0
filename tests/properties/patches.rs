//! Patch operations applied twice equal applied once.

use proptest::prelude::*;

use stackwright::domain::services::PatchOp;

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][A-Za-z0-9]{0,10}").unwrap()
}

/// A build-tool config with an arbitrary `plugins` array
fn vite_config() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(identifier(), 0..4),
        proptest::collection::vec(identifier(), 0..5),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(imports, plugins, multiline, trailing_comma)| {
            let mut out = String::new();
            for name in &imports {
                out.push_str(&format!("import {name} from \"{name}\";\n"));
            }
            out.push_str("\nexport default defineConfig({\n  plugins: [");
            let entries: Vec<String> = plugins.iter().map(|p| format!("{p}()")).collect();
            if multiline && !entries.is_empty() {
                for entry in &entries {
                    out.push_str(&format!("\n    {entry},"));
                }
                if !trailing_comma {
                    out.pop();
                }
                out.push_str("\n  ");
            } else {
                out.push_str(&entries.join(", "));
                if trailing_comma && !entries.is_empty() {
                    out.push(',');
                }
            }
            out.push_str("],\n});\n");
            out
        })
}

fn text_lines() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Za-z0-9_./ -]{0,20}", 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: import and array patches are idempotent on build configs.
    #[test]
    fn property_source_patches_are_idempotent(
        source in vite_config(),
        plugin in identifier(),
    ) {
        let ops = [
            PatchOp::ensure_import(format!("import {plugin} from \"{plugin}\";")),
            PatchOp::insert_array_entry("plugins", format!("{plugin}()")),
        ];
        for op in &ops {
            let once = op.patched(&source).unwrap();
            let twice = op.patched(&once).unwrap();
            prop_assert_eq!(&twice, &once, "{}", op.describe());
        }
        let wanted = format!("{plugin}()");
        prop_assert!(ops[1].patched(&source).unwrap().contains(&wanted));
    }

    /// PROPERTY: appending a line twice equals appending it once.
    #[test]
    fn property_append_line_is_idempotent(
        content in text_lines(),
        line in "[A-Za-z0-9_./-]{1,20}",
    ) {
        let op = PatchOp::append_line_if_absent(line.clone());
        let once = op.patched(&content).unwrap();

        prop_assert_eq!(op.patched(&once).unwrap(), once.clone());
        prop_assert!(once.lines().any(|l| l.trim_end() == line));
    }

    /// PROPERTY: JSON keys are only ever set once.
    #[test]
    fn property_json_set_is_idempotent(
        keys in proptest::collection::btree_map(identifier(), any::<u16>(), 0..5),
        key in identifier(),
        value in any::<u16>(),
    ) {
        let doc = serde_json::to_string_pretty(&serde_json::json!({ "scripts": keys })).unwrap();
        let op = PatchOp::json_set_if_absent(&["scripts", &key], serde_json::json!(value));

        let once = op.patched(&doc).unwrap();
        prop_assert_eq!(op.patched(&once).unwrap(), once.clone());

        let parsed: serde_json::Value = serde_json::from_str(&once).unwrap();
        let expected = keys.get(&key).copied().unwrap_or(value);
        prop_assert_eq!(&parsed["scripts"][&key], &serde_json::json!(expected));
    }
}
