//! PEP 503 "simple" HTML pages: the root listing and one page per package.
//!
//! Every dynamic value (names, filenames, URLs) goes through [`escape`]
//! before it is embedded.

mod package;
mod root;

pub use package::{package_index, sorted_wheels};
pub use root::{root_index, RootPage};

/// Minimal HTML entity escaping (`&`, `<`, `>`, `"`, `'`).
pub fn escape(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// Opens a document up to and including `<body>` and the `<h1>` heading.
/// `heading` must already be escaped.
fn open_document(heading: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n    \
         <meta charset=\"utf-8\">\n    \
         <title>{heading}</title>\n\
         </head>\n\
         <body>\n    \
         <h1>{heading}</h1>\n"
    )
}

/// Appends one `<a href>` line. Both arguments must already be escaped.
fn push_link(html: &mut String, href: &str, text: &str) {
    html.push_str("    <a href=\"");
    html.push_str(href);
    html.push_str("\">");
    html.push_str(text);
    html.push_str("</a><br>\n");
}

fn close_document(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup_characters() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape("plain-name_1.0"), "plain-name_1.0");
    }

    #[test]
    fn document_skeleton() {
        let mut html = open_document("Links for x");
        push_link(&mut html, "x/", "x");
        close_document(&mut html);
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    \
             <title>Links for x</title>\n</head>\n<body>\n    <h1>Links for x</h1>\n    \
             <a href=\"x/\">x</a><br>\n</body>\n</html>\n"
        );
    }
}
