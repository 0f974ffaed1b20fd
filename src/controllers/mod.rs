pub mod dashboard;
pub mod feed;
pub mod health;
pub mod news;
pub mod report;
