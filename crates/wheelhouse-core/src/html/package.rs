//! Per-package page: one link per wheel, newest first.

use std::cmp::Ordering;

use crate::checksum;
use crate::manifest::WheelRecord;

use super::{close_document, escape, open_document, push_link};

/// Sort key is the plain string tuple `(upload_date, filename)`, descending.
/// Dates are compared as text, never parsed; a missing date compares as `""`.
fn newest_first(a: &WheelRecord, b: &WheelRecord) -> Ordering {
    (b.upload_date(), b.filename.as_str()).cmp(&(a.upload_date(), a.filename.as_str()))
}

/// Wheels in page order. Stable, so exact duplicates keep manifest order.
pub fn sorted_wheels(wheels: &[WheelRecord]) -> Vec<&WheelRecord> {
    let mut sorted: Vec<&WheelRecord> = wheels.iter().collect();
    sorted.sort_by(|a, b| newest_first(a, b));
    sorted
}

/// Renders the index page for one package.
///
/// Title and heading carry the display name (not the normalized one). Each
/// link targets the wheel URL, plus `#sha256=<hex>` when a digest is known.
pub fn package_index(display_name: &str, wheels: &[WheelRecord]) -> String {
    let mut html = open_document(&format!("Links for {}", escape(display_name)));

    for wheel in sorted_wheels(wheels) {
        let mut href = escape(&wheel.url);
        if let Some(fragment) = checksum::fragment(wheel.sha256()) {
            href.push_str(&escape(&fragment));
        }
        push_link(&mut html, &href, &escape(&wheel.filename));
    }

    close_document(&mut html);
    html
}
