//! Content nodes: classification of manuscript lines and the renderers that
//! place chapters, front matter and the index.

pub mod block;
pub mod chapter;
pub mod front_matter;
pub mod image;
pub mod index;
