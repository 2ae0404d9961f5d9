pub mod calculator;
pub mod loader;
pub mod pager;
pub mod session;
