//! Generates the built-in keyword table from `config/event_keywords.toml`.
//!
//! The output is a `keywords.rs` file in `OUT_DIR` holding a static
//! `BUILTIN_KEYWORDS` slice, included by `src/registry.rs`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config/event_keywords.toml";

// Must match the variants of `EventType`, in declaration order.
const EVENT_TYPES: &[&str] = &["Incident", "Gathering", "Announcement", "Crisis"];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("failed to read {CONFIG_PATH}: {e}"));
    let doc: toml::Table = raw
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {CONFIG_PATH}: {e}"));

    let entries = doc
        .get("event_type")
        .and_then(toml::Value::as_array)
        .unwrap_or_else(|| panic!("{CONFIG_PATH}: missing [[event_type]] entries"));

    let mut seen: Vec<&str> = Vec::new();
    let mut out = String::from("// @generated by build.rs from config/event_keywords.toml\n\n");
    out.push_str("pub(crate) static BUILTIN_KEYWORDS: &[KeywordSet] = &[\n");

    for entry in entries {
        let name = entry
            .get("name")
            .and_then(toml::Value::as_str)
            .unwrap_or_else(|| panic!("{CONFIG_PATH}: event_type entry without a name"));
        if !EVENT_TYPES.contains(&name) {
            panic!("{CONFIG_PATH}: unknown event type {name:?}");
        }
        if seen.contains(&name) {
            panic!("{CONFIG_PATH}: duplicate event type {name:?}");
        }
        seen.push(name);

        let keywords: Vec<String> = entry
            .get("keywords")
            .and_then(toml::Value::as_array)
            .unwrap_or_else(|| panic!("{CONFIG_PATH}: {name} has no keywords array"))
            .iter()
            .map(|kw| {
                let kw = kw
                    .as_str()
                    .unwrap_or_else(|| panic!("{CONFIG_PATH}: {name} has a non-string keyword"));
                let kw = kw.trim().to_lowercase();
                if kw.is_empty() {
                    panic!("{CONFIG_PATH}: {name} has a blank keyword");
                }
                kw
            })
            .collect();
        if keywords.is_empty() {
            panic!("{CONFIG_PATH}: {name} has an empty keyword list");
        }

        let _ = writeln!(
            out,
            "    KeywordSet {{\n        event_type: EventType::{name},\n        keywords: &{keywords:?},\n    }},"
        );
    }

    // Declaration order of the table must follow the enum so ties resolve
    // the same way whether the built-in or an override table is used.
    if seen != EVENT_TYPES {
        panic!("{CONFIG_PATH}: event types must be listed exactly once, in order {EVENT_TYPES:?}");
    }

    out.push_str("];\n");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("keywords.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
}
