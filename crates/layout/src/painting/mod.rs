pub mod box_painter;
pub mod chrome;

pub use chrome::ChromeRenderer;
