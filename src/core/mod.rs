pub mod analytics;
pub mod calendar;
pub mod log;
pub mod qr;
pub mod quotes;
pub mod session;
