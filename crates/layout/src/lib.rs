use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// The input or configuration cannot be laid out at all.
    #[error("Structural error: {0}")]
    Structural(String),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;
pub use self::interface::LayoutEnvironment;

mod elements;
pub mod config;
pub mod fonts;
pub mod interface;
pub mod nodes;
pub mod output;
pub mod pagination;

pub mod algorithms;
pub mod painting;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::elements::{
    CircleElement, ImageElement, ImageKey, LayoutElement, LinkElement, PositionedElement,
    RectElement, RuleElement, TextElement,
};
pub use self::fonts::{SharedFontLibrary, ShapingMeasurer};
pub use self::nodes::block::{BlockItem, ContentBlock};
pub use self::nodes::image::AssetError;
pub use self::output::{LaidOutDocument, Page, PageKind};
pub use self::pagination::PaginationController;

pub use quire_types::{Rect, Size};

#[cfg(test)]
mod index_test;
#[cfg(test)]
mod integration_test;
#[cfg(test)]
mod test_utils;
