use crate::Result;
use crate::ranking::RankedEntry;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(entries: &[RankedEntry], writer: &mut W) -> Result<()> {
    let output = json!({
        "entries": entries
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::License;

    fn ranked(awesomeness: usize, repo: &str) -> RankedEntry {
        RankedEntry {
            awesomeness,
            description: format!("The {repo} repository"),
            license: None,
            link: format!("https://github.com/owner/{repo}"),
        }
    }

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate(&[], &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_generate_keeps_order_and_fields() {
        let mut licensed = ranked(9, "first");
        licensed.license = Some(License {
            key: "mit".to_string(),
            name: Some("MIT License".to_string()),
            spdx_id: Some("MIT".to_string()),
            url: Some("https://api.github.com/licenses/mit".to_string()),
            node_id: Some("MDc6TGljZW5zZTEz".to_string()),
        });

        let mut output = String::new();
        generate(&[licensed, ranked(31, "second")], &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = parsed["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0]["Awesomeness"], 9);
        assert_eq!(entries[0]["Link"], "https://github.com/owner/first");
        assert_eq!(entries[0]["Description"], "The first repository");
        assert_eq!(entries[0]["License"]["key"], "mit");
        assert_eq!(entries[0]["License"]["spdx_id"], "MIT");

        assert_eq!(entries[1]["Awesomeness"], 31);
        assert!(entries[1]["License"].is_null());
        assert!(entries[1].get("stars").is_none());
    }

    #[test]
    fn test_generate_is_pretty_printed() {
        let mut output = String::new();
        generate(&[ranked(10, "repo")], &mut output).unwrap();
        assert!(output.contains("\n  \"entries\": ["));
    }
}
