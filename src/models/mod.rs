pub mod method;
pub mod next_event;
pub mod settings;
pub mod timings;
