//! Workbook link discovery on the published schedule page.
//!
//! The page lists one block per institute. The block is found by its
//! heading text; the first `.xls`/`.xlsx` link inside the heading's parent
//! element is the current timetable.

use std::time::Duration;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::IoError;
use crate::fetch::fetch_text;

/// Default block heading on the schedule page.
pub const DEFAULT_BLOCK: &str = "Институт компьютерных наук";

/// Downloads `page_url` and returns the absolute URL of the workbook listed
/// under the block whose text contains `block_pattern`.
///
/// # Errors
///
/// Returns the [`fetch_text`] errors for the page download, and the
/// [`find_workbook_link`] errors when the page has no usable link.
pub fn discover_url(
    page_url: &str,
    block_pattern: &str,
    timeout: Duration,
) -> Result<String, IoError> {
    let html = fetch_text(page_url, timeout)?;
    let url = find_workbook_link(&html, page_url, block_pattern)?;
    info!(page = page_url, url = %url, "workbook link discovered");
    Ok(url)
}

/// Finds the workbook link in an already downloaded page.
///
/// Text nodes are matched case-insensitively against `block_pattern`, in
/// document order. For each match the parent element is searched for
/// anchors whose `href` path ends in `.xls` or `.xlsx`; the first one wins
/// and is resolved against `base_url`.
///
/// # Errors
///
/// Returns [`IoError::InvalidLink`] if `base_url` or the chosen `href`
/// cannot be parsed, and [`IoError::LinkNotFound`] if no block holds a link.
pub fn find_workbook_link(
    html: &str,
    base_url: &str,
    block_pattern: &str,
) -> Result<String, IoError> {
    let base = Url::parse(base_url).map_err(|e| IoError::InvalidLink {
        href: base_url.to_string(),
        reason: e.to_string(),
    })?;
    let anchors = Selector::parse("a[href]").expect("anchor selector is valid");
    let needle = block_pattern.to_lowercase();

    let document = Html::parse_document(html);
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if !text.to_lowercase().contains(&needle) {
            continue;
        }
        let Some(block) = node.parent().and_then(ElementRef::wrap) else {
            continue;
        };

        let href = block
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| is_workbook_href(href));
        match href {
            Some(href) => {
                let url = base.join(href.trim()).map_err(|e| IoError::InvalidLink {
                    href: href.to_string(),
                    reason: e.to_string(),
                })?;
                return Ok(url.to_string());
            }
            None => debug!(block = block.value().name(), "block matched without a workbook link"),
        }
    }

    Err(IoError::LinkNotFound {
        url: base_url.to_string(),
        pattern: block_pattern.to_string(),
    })
}

/// `true` when the path part of `href` names an `.xls` or `.xlsx` file.
fn is_workbook_href(href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or_default().trim();
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".xls") || lower.ends_with(".xlsx")
}
