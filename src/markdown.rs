//! The bundled markdown dialect.
//!
//! Intermediate form is plain markdown: the page title as a `#` heading,
//! then one markdown fragment per statement, in statement order. The final
//! pass converts that buffer to HTML with
//! [pulldown-cmark](https://docs.rs/pulldown-cmark) and wraps it in a
//! minimal [maud](https://maud.lambda.xyz/) page shell.
//!
//! ## Intermediate Forms
//!
//! | Statement | Markdown |
//! |-----------|----------|
//! | Heading | `## text` (`#` × level) |
//! | Image | `![alt](uri "alt")` |
//! | Link | `[text](uri)` |
//! | Horizontal navbar | `[label](url) \| [label](url)` on one line |
//! | Vertical navbar | `- [label](url)` list |
//!
//! Navbar items carry page ids, not URIs; they resolve through the node's
//! registry at render time, which is why the whole tree must be assembled
//! before rendering starts.

use maud::{DOCTYPE, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

use crate::content::Statement;
use crate::dialect::{Dialect, DialectError};
use crate::site::SiteNode;
use crate::widget::NavbarWidget;

#[derive(Debug, Default)]
pub struct MarkdownDialect;

impl MarkdownDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MarkdownDialect {
    fn render_intermediate(&self, node: &mut SiteNode) -> Result<(), DialectError> {
        let mut buf = format!("# {}\n\n", node.page_title());

        for statement in node.content().statements() {
            match statement {
                Statement::Heading(h) => {
                    let hashes = "#".repeat(h.level() as usize);
                    buf.push_str(&format!("{} {}\n\n", hashes, h.text()));
                }
                Statement::Image(iw) => {
                    let uri = iw.locator().uri()?;
                    buf.push_str(&format!(
                        "![{}]({} \"{}\")\n\n",
                        iw.alt_text(),
                        uri,
                        iw.alt_text()
                    ));
                }
                Statement::Link(lw) => {
                    let uri = lw.locator().uri()?;
                    buf.push_str(&format!("[{}]({})\n\n", lw.text(), uri));
                }
                Statement::HorizontalNavbar(nw) => {
                    let links = navbar_links(node, nw)?;
                    buf.push_str(&links.join(" | "));
                    buf.push_str("\n\n");
                }
                Statement::VerticalNavbar(nw) => {
                    for link in navbar_links(node, nw)? {
                        buf.push_str(&format!("- {link}\n"));
                    }
                    buf.push('\n');
                }
            }
        }

        node.set_intermediate_output(buf);
        Ok(())
    }

    fn render_html(&self, node: &mut SiteNode) -> Result<(), DialectError> {
        let intermediate = node.intermediate_output()?.to_string();

        let mut body = String::new();
        md_html::push_html(&mut body, Parser::new(&intermediate));

        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (node.page_title()) }
                }
                body {
                    main {
                        (PreEscaped(body))
                    }
                }
            }
        };

        node.set_final_output(page.into_string());
        Ok(())
    }
}

/// Resolve a navbar's items to `[label](url)` fragments, in item order.
fn navbar_links(node: &SiteNode, navbar: &NavbarWidget) -> Result<Vec<String>, DialectError> {
    navbar
        .items()
        .iter()
        .map(|item| {
            let url = node.page_url(&item.page_id)?;
            Ok(format!("[{}]({})", item.label, url))
        })
        .collect()
}
