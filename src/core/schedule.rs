//! Schedule scraping for the venue page.
//!
//! The page lists one `div.list-view-item` per show night. Inside each block the
//! date sits in the first `h2.dates` and every performer has its own `h1`.

use crate::core::{Listing, ListingBlock, Schedule};
use crate::utils::error::{Result, ShowtextError};
use scraper::{ElementRef, Html, Selector};

pub const LISTING_SELECTOR: &str = "div.list-view-item";
pub const DATE_SELECTOR: &str = "h2.dates";
pub const PERFORMER_SELECTOR: &str = "h1";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ShowtextError::parse(format!("bad selector {}: {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Picks the listing blocks out of a full page, in document order.
pub fn select_listing_blocks(html: &str) -> Result<Vec<ListingBlock>> {
    let document = Html::parse_document(html);
    let listing = selector(LISTING_SELECTOR)?;

    let blocks: Vec<ListingBlock> = document
        .select(&listing)
        .map(|element| ListingBlock(element.html()))
        .collect();

    if blocks.is_empty() {
        return Err(ShowtextError::parse(format!(
            "no `{}` elements found; the page layout may have changed",
            LISTING_SELECTOR
        )));
    }

    tracing::debug!("Selected {} listing blocks", blocks.len());
    Ok(blocks)
}

pub fn extract_listing(block: &ListingBlock) -> Result<Listing> {
    let fragment = Html::parse_fragment(block.html());
    let date_selector = selector(DATE_SELECTOR)?;
    let performer_selector = selector(PERFORMER_SELECTOR)?;

    let date = fragment
        .select(&date_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| {
            ShowtextError::parse(format!("listing block has no `{}` element", DATE_SELECTOR))
        })?;

    let performers = fragment
        .select(&performer_selector)
        .map(element_text)
        .filter(|name| !name.is_empty())
        .collect();

    Ok(Listing { date, performers })
}

pub fn extract_schedule(blocks: &[ListingBlock]) -> Result<Schedule> {
    let listings = blocks
        .iter()
        .map(extract_listing)
        .collect::<Result<Vec<_>>>()?;
    Ok(Schedule::new(listings))
}
