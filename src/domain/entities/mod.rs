pub mod article;
pub mod company;
