//! Document rendering adapters.

mod text_export;

pub use text_export::render_memo;
