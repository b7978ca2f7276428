pub mod format;
pub mod news;
pub mod pipeline;
