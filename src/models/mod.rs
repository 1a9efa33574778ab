pub mod rooms;
pub mod timetable;

pub use rooms::*;
pub use timetable::*;
