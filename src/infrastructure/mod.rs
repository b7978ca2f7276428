pub mod catalog;
pub mod feeds;
