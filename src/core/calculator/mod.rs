pub mod counts;
pub mod duration;
pub mod stations;
pub mod time;
pub mod users;
