pub mod market_data;
pub mod news_search;
