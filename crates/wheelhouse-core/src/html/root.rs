//! Root page: one link per package, pointing at its normalized directory.

use crate::manifest::Manifest;
use crate::name::normalize;

use super::{close_document, escape, open_document, push_link};

/// Fixed text of the root page.
///
/// The default is a neutral `Simple Index` heading with no subtitle. A site
/// that wants a branded page, e.g. `DGX Spark Wheels - Simple Index` with the
/// subtitle `Python wheels built for aarch64 DGX systems`, sets both through
/// config or `--title`/`--description`; the output is then identical to that
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPage {
    /// Used for both `<title>` and `<h1>`.
    pub title: String,
    /// Optional paragraph shown under the heading.
    pub description: Option<String>,
}

impl Default for RootPage {
    fn default() -> Self {
        Self {
            title: "Simple Index".to_string(),
            description: None,
        }
    }
}

/// Renders the root index. Packages are listed in ascending display-name
/// order; an empty manifest still yields a complete document with no links.
pub fn root_index(manifest: &Manifest, page: &RootPage) -> String {
    let mut html = open_document(&escape(&page.title));

    if let Some(description) = page.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!("    <p>{}</p>\n", escape(description)));
    }

    for display_name in manifest.packages.keys() {
        let href = format!("{}/", normalize(display_name));
        push_link(&mut html, &escape(&href), &escape(display_name));
    }

    close_document(&mut html);
    html
}
