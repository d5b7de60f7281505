//! Page title extraction.

use crate::{Result, SitemarkError};

const TITLE_PREFIX: &str = "# ";

/// Text of the level-1 heading that opens `document`.
///
/// Only a single `#` qualifies: `## Title` is rejected here even though the
/// block classifier treats it as a heading.
pub fn title_of(document: &str) -> Result<String> {
    let Some(rest) = document.strip_prefix(TITLE_PREFIX) else {
        log::debug!("no level-1 heading at document start");
        return Err(SitemarkError::Format(
            "document must start with a level-1 heading (\"# \")".to_string(),
        ));
    };

    let title = rest.lines().next().unwrap_or_default().trim();
    if title.is_empty() {
        return Err(SitemarkError::Format("level-1 heading is empty".to_string()));
    }

    Ok(title.to_string())
}
