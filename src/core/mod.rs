pub mod calendar;
pub mod countdown;
pub mod dashboard;
pub mod log;
pub mod resolver;
pub mod settings;
pub mod ticker;
