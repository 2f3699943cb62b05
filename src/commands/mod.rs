pub mod config;
pub mod month;
pub mod on;
pub mod upcoming;
