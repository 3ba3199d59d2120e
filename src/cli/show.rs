//! Profile output command.
//!
//! Prints the resolved profile as JSON (default) or TOML, optionally
//! filtered to a subset of top-level fields.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::ShowArgs;
use crate::config::SiteConfig;
use crate::log;

/// Print the resolved profile.
pub fn show_profile(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let mut value = serde_json::to_value(config)?;

    if let Some(ref fields) = args.fields {
        value = filter_fields(&value, fields);
    }

    let formatted = if args.toml {
        // Field order is preserved (serde_json preserve_order)
        toml::to_string_pretty(&value)?
    } else if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Keep only the requested top-level fields, in the requested order.
fn filter_fields(value: &JsonValue, fields: &[String]) -> JsonValue {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };

    let mut filtered = Map::new();
    for field in fields {
        if let Some(v) = obj.get(field) {
            filtered.insert(field.clone(), v.clone());
        } else {
            log!("warning"; "unknown field '{}' ignored", field);
        }
    }
    JsonValue::Object(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_fields() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        let filtered = filter_fields(&value, &["footer".into(), "site".into()]);

        let obj = filtered.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        // Requested order, not schema order
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, ["footer", "site"]);
    }

    #[test]
    fn test_filter_unknown_field_ignored() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        let filtered = filter_fields(&value, &["nope".into()]);
        assert!(filtered.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_json_output_preserves_nav_order() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        let nav = value["footer"]["nav"].as_array().unwrap();
        assert_eq!(nav[0]["text"], "Posts Props");
        assert_eq!(nav[1]["text"], "Markdown Style");
        // `enabled = true` entries serialize without the flag
        assert!(nav[0].get("enabled").is_none());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        let toml_text = toml::to_string_pretty(&value).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }
}
