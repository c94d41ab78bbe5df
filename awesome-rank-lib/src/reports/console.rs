use crate::Result;
use crate::ranking::RankedEntry;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Width of the score column, including the two spaces that follow it.
const SCORE_COLUMN: usize = 5;

pub fn generate<W: Write>(entries: &[RankedEntry], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut sorted: Vec<&RankedEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.awesomeness.cmp(&a.awesomeness));

    let top_score = sorted.first().map_or(0, |entry| entry.awesomeness);
    let term_width = get_terminal_width();

    for entry in sorted {
        let score = format!("{:>3}", entry.awesomeness);
        let license = entry.license.as_ref().map_or("no license", |license| license.key.as_str());

        if use_colors {
            let score = match band(entry.awesomeness, top_score) {
                Band::High => score.green().bold().to_string(),
                Band::Middle => score.yellow().bold().to_string(),
                Band::Low => score.red().bold().to_string(),
            };
            writeln!(writer, "{score}  {}  {}", entry.link.bold(), format!("[{license}]").dimmed())?;
        } else {
            writeln!(writer, "{score}  {}  [{license}]", entry.link)?;
        }

        if !entry.description.is_empty() {
            for line in wrap_text(&entry.description, term_width.saturating_sub(SCORE_COLUMN)) {
                writeln!(writer, "{:width$}{line}", "", width = SCORE_COLUMN)?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    High,
    Middle,
    Low,
}

/// Place a score in the upper, middle or lower third relative to the best score of the run.
const fn band(score: usize, top_score: usize) -> Band {
    if score * 3 >= top_score * 2 {
        Band::High
    } else if score * 3 >= top_score {
        Band::Middle
    } else {
        Band::Low
    }
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Word-wrap text to lines of at most `width` columns; single words longer than that stay whole
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if !current_line.is_empty() && current_line.len() + 1 + word.len() > width {
            lines.push(core::mem::take(&mut current_line));
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::License;

    fn ranked(awesomeness: usize, repo: &str, license: Option<&str>) -> RankedEntry {
        RankedEntry {
            awesomeness,
            description: format!("The {repo} repository"),
            license: license.map(|key| License {
                key: key.to_string(),
                name: None,
                spdx_id: None,
                url: None,
                node_id: None,
            }),
            link: format!("https://github.com/owner/{repo}"),
        }
    }

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate(&[], false, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_generate_sorted_by_descending_score() {
        let entries = [ranked(12, "low", None), ranked(38, "high", Some("mit")), ranked(25, "mid", None)];

        let mut output = String::new();
        generate(&entries, false, &mut output).unwrap();

        let high = output.find("owner/high").unwrap();
        let mid = output.find("owner/mid").unwrap();
        let low = output.find("owner/low").unwrap();
        assert!(high < mid && mid < low);

        assert!(output.contains(" 38  https://github.com/owner/high  [mit]"));
        assert!(output.contains(" 12  https://github.com/owner/low  [no license]"));
        assert!(output.contains("     The mid repository"));
    }

    #[test]
    fn test_generate_equal_scores_keep_order() {
        let entries = [ranked(20, "first", None), ranked(20, "second", None)];

        let mut output = String::new();
        generate(&entries, false, &mut output).unwrap();

        assert!(output.find("owner/first").unwrap() < output.find("owner/second").unwrap());
    }

    #[test]
    fn test_generate_color_mode_never() {
        let mut output = String::new();
        generate(&[ranked(30, "repo", Some("mit"))], false, &mut output).unwrap();
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_generate_color_mode_always() {
        let mut output = String::new();
        generate(&[ranked(30, "repo", Some("mit"))], true, &mut output).unwrap();
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_band() {
        assert_eq!(band(40, 40), Band::High);
        assert_eq!(band(27, 40), Band::High);
        assert_eq!(band(26, 40), Band::Middle);
        assert_eq!(band(14, 40), Band::Middle);
        assert_eq!(band(13, 40), Band::Low);
        assert_eq!(band(4, 40), Band::Low);
    }

    #[test]
    fn test_wrap_text_short() {
        let lines = wrap_text("short text", 80);
        assert_eq!(lines, ["short text"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let text = "This is a very long text that should be wrapped at word boundaries when it exceeds the specified width";
        let lines = wrap_text(text, 30);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.len() <= 30));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_exact_fit() {
        assert_eq!(wrap_text("word1 word2 word3", 17).len(), 1);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 80), [""]);
    }
}
