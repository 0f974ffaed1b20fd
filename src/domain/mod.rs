pub mod feed;
pub mod news;
pub mod report;
pub mod stats;
