//! Extraction of repository entries from an index document.
//!
//! An index document is markdown whose entries look like
//!
//! ```text
//! * [Friendly Name](https://github.com/owner/repo) - A short description.
//! ```
//!
//! Each line is matched on its own:
//!
//! - the entry may start anywhere on the line, so nested bullets are recognized
//! - the friendly name runs from `* [` to the first `](https://<host>/` that follows
//! - the owner runs up to the first `/`, the repo up to the first `) - `
//! - the description runs from there to the last `.` on the line, which is required
//!
//! When a candidate `* [` on a line does not complete, later ones on the same line are tried.

use super::Entry;
use crate::Error;

const BULLET_OPEN: &str = "* [";
const LINK_CLOSE: &str = ") - ";

/// Extract every entry of an index document, in document order.
///
/// `index_name` only serves to identify the document in the error raised when no line matches.
pub fn extract_entries(text: &str, host: &str, index_name: &str) -> Result<Vec<Entry>, Error> {
    let link_open = format!("](https://{host}/");
    let entries: Vec<Entry> = text.lines().filter_map(|line| parse_line(line, host, &link_open)).collect();

    if entries.is_empty() {
        return Err(Error::Parsing {
            repo: index_name.to_string(),
        });
    }

    Ok(entries)
}

/// Match a single line, returning the first entry it describes.
fn parse_line(line: &str, host: &str, link_open: &str) -> Option<Entry> {
    line.match_indices(BULLET_OPEN)
        .filter_map(|(start, _)| line.get(start + BULLET_OPEN.len()..))
        .find_map(|candidate| parse_candidate(candidate, host, link_open))
}

fn parse_candidate(candidate: &str, host: &str, link_open: &str) -> Option<Entry> {
    let (friendly_name, link) = candidate.split_once(link_open)?;
    let (owner, after_owner) = link.split_once('/')?;
    let (repo, after_link) = after_owner.split_once(LINK_CLOSE)?;
    let (description, _) = after_link.rsplit_once('.')?;

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some(Entry::new(friendly_name, host, owner, repo, description))
}
