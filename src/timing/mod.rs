pub mod clock;
pub mod moment;
pub mod schedule;
pub mod window;
