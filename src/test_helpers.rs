//! Shared test utilities for the sitewright test suite.
//!
//! The centerpiece is [`TagDialect`], a deliberately tiny reference dialect
//! whose output is trivially assertable. Its intermediate form is a line
//! protocol:
//!
//! ```text
//! ## page-top | node title ##
//! ## widget | image | image alt text | file://some/image/path ##
//! ## page-bottom | node title ##
//! ```
//!
//! and its final pass turns those lines into `<header>`, `<widget>` and
//! `<footer>` tags. It renders *only* image statements — every other kind is
//! an `UnsupportedStatement` error, which doubles as the fixture for the
//! unsupported-statement tests.

use crate::content::{Statement, StatementKind};
use crate::dialect::{Dialect, DialectError};
use crate::site::SiteNode;

/// Minimal dialect with a line-oriented intermediate form.
#[derive(Debug, Default)]
pub struct TagDialect;

impl Dialect for TagDialect {
    fn render_intermediate(&self, node: &mut SiteNode) -> Result<(), DialectError> {
        let mut buf = format!("## page-top | {} ##\n", node.page_title());

        for statement in node.content().statements() {
            match statement {
                Statement::Image(iw) => {
                    let uri = iw.locator().uri()?;
                    buf.push_str(&format!(
                        "## widget | image | {} | {} ##\n",
                        iw.alt_text(),
                        uri
                    ));
                }
                other => return Err(DialectError::UnsupportedStatement(other.kind())),
            }
        }

        buf.push_str(&format!("## page-bottom | {} ##\n", node.page_title()));

        node.set_intermediate_output(buf);
        Ok(())
    }

    fn render_html(&self, node: &mut SiteNode) -> Result<(), DialectError> {
        let intermediate = node.intermediate_output()?.to_string();
        let mut buf = String::new();

        for line in intermediate.lines() {
            if let Some(content) = tagged(line, "## page-top | ") {
                buf.push_str(&format!("<header>{content}</header>\n"));
            } else if let Some(content) = tagged(line, "## widget | image | ") {
                buf.push_str(&format!("<widget>{content}</widget>\n"));
            } else if let Some(content) = tagged(line, "## page-bottom | ") {
                buf.push_str(&format!("<footer>{content}</footer>\n"));
            } else if line.is_empty() {
                continue;
            } else {
                return Err(DialectError::InvalidIntermediate(line.to_string()));
            }
        }

        node.set_final_output(buf);
        Ok(())
    }
}

/// Strip a line's prefix and the trailing ` ##`, or `None` if it isn't a
/// line of that kind.
fn tagged<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix(" ##")
}

/// The kind tags of a node's statements, in order.
pub fn statement_kinds(node: &SiteNode) -> Vec<StatementKind> {
    node.content()
        .statements()
        .iter()
        .map(Statement::kind)
        .collect()
}

/// Find a direct child by page id. Panics with the available ids on a miss.
pub fn find_child<'a>(node: &'a SiteNode, page_id: &str) -> &'a SiteNode {
    node.children()
        .iter()
        .find(|c| c.page_id() == page_id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = node.children().iter().map(|c| c.page_id()).collect();
            panic!(
                "child '{page_id}' not found under '{}'. Available: {ids:?}",
                node.page_id()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::LocalLocator;
    use crate::site::Site;
    use crate::widget::{HeadingWidget, ImageWidget};
    use std::rc::Rc;

    #[test]
    fn tag_dialect_round_trips_a_single_image() {
        let mut site = Site::new("node title", Box::new(TagDialect));

        let image = ImageWidget::new(
            "image alt text",
            Rc::new(LocalLocator::new("some/image/path")),
        );
        site.root_mut().builder().add_content_image(image);

        site.render().unwrap();

        assert_eq!(
            site.root().intermediate_output().unwrap(),
            "## page-top | node title ##\n\
             ## widget | image | image alt text | file://some/image/path ##\n\
             ## page-bottom | node title ##\n"
        );
        assert_eq!(
            site.root().final_output().unwrap(),
            "<header>node title</header>\n\
             <widget>image alt text | file://some/image/path</widget>\n\
             <footer>node title</footer>\n"
        );
    }

    #[test]
    fn tag_dialect_rejects_statement_kinds_it_does_not_render() {
        let mut site = Site::new("node title", Box::new(TagDialect));
        site.root_mut()
            .builder()
            .add_heading(HeadingWidget::new(1, "Welcome").unwrap());

        let err = site.render().unwrap_err();
        assert!(matches!(
            err.source,
            DialectError::UnsupportedStatement(StatementKind::Heading)
        ));
    }

    #[test]
    fn tag_dialect_rejects_malformed_intermediate_lines() {
        let mut site = Site::new("node title", Box::new(TagDialect));
        site.root_mut().set_intermediate_output("not a tagged line\n");

        let err = TagDialect.render_html(site.root_mut()).unwrap_err();
        assert!(matches!(
            err,
            DialectError::InvalidIntermediate(line) if line == "not a tagged line"
        ));
    }
}
