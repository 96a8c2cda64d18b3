//! Immutable content descriptions.
//!
//! A widget describes one content element — a heading, an image, a link, a
//! navbar — as pure data. Widgets have no identity beyond their field values
//! and no behavior beyond construction; everything about *how* they render
//! belongs to the dialect.
//!
//! Widgets that point at a resource hold a [`SharedLocator`] rather than a
//! URI string, so resolution (and validation) happens at render time.

use thiserror::Error;

use crate::locator::SharedLocator;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("heading level must be at least 1")]
    InvalidHeadingLevel,
}

/// A section heading at a given nesting depth.
#[derive(Debug, Clone)]
pub struct HeadingWidget {
    level: u8,
    text: String,
}

impl HeadingWidget {
    /// `level` is a 1-based nesting depth (1 = page-level heading).
    pub fn new(level: u8, text: impl Into<String>) -> Result<Self, WidgetError> {
        if level == 0 {
            return Err(WidgetError::InvalidHeadingLevel);
        }

        Ok(Self {
            level,
            text: text.into(),
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One large content image with alternative text and optional pixel hints.
#[derive(Debug, Clone)]
pub struct ImageWidget {
    alt_text: String,
    locator: SharedLocator,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageWidget {
    pub fn new(alt_text: impl Into<String>, locator: SharedLocator) -> Self {
        Self {
            alt_text: alt_text.into(),
            locator,
            width: None,
            height: None,
        }
    }

    /// Attach pixel dimension hints. Zero means "unset".
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = (width > 0).then_some(width);
        self.height = (height > 0).then_some(height);
        self
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn locator(&self) -> &SharedLocator {
        &self.locator
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }
}

/// An inline link.
#[derive(Debug, Clone)]
pub struct LinkWidget {
    text: String,
    locator: SharedLocator,
}

impl LinkWidget {
    pub fn new(text: impl Into<String>, locator: SharedLocator) -> Self {
        Self {
            text: text.into(),
            locator,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn locator(&self) -> &SharedLocator {
        &self.locator
    }
}

/// One navbar entry: a display label and the page id it points at.
///
/// The id resolves to a URL at render time, through the site's registry —
/// so a navbar may be appended before its target pages exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarItem {
    pub label: String,
    pub page_id: String,
}

impl NavbarItem {
    pub fn new(label: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            page_id: page_id.into(),
        }
    }
}

/// A navigation bar. Item order is render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarWidget {
    items: Vec<NavbarItem>,
}

impl NavbarWidget {
    pub fn new(items: Vec<NavbarItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavbarItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::LocalLocator;
    use std::rc::Rc;

    #[test]
    fn heading_level_zero_rejected() {
        let err = HeadingWidget::new(0, "text").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidHeadingLevel));
    }

    #[test]
    fn heading_carries_level_and_text() {
        let h = HeadingWidget::new(3, "Section").unwrap();
        assert_eq!(h.level(), 3);
        assert_eq!(h.text(), "Section");
    }

    #[test]
    fn image_dimensions_default_unset() {
        let iw = ImageWidget::new("alt", Rc::new(LocalLocator::new("p")));
        assert_eq!(iw.width(), None);
        assert_eq!(iw.height(), None);
    }

    #[test]
    fn image_zero_dimension_means_unset() {
        let iw = ImageWidget::new("alt", Rc::new(LocalLocator::new("p"))).with_dimensions(100, 0);
        assert_eq!(iw.width(), Some(100));
        assert_eq!(iw.height(), None);
    }

    #[test]
    fn navbar_preserves_item_order() {
        let nw = NavbarWidget::new(vec![
            NavbarItem::new("B", "b"),
            NavbarItem::new("A", "a"),
        ]);
        let labels: Vec<&str> = nw.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["B", "A"]);
    }
}
