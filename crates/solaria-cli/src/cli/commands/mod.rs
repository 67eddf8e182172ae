pub mod config;
pub mod feed;
pub mod headline;
pub mod subscribe;
