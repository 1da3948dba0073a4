pub mod body;
pub mod event;
pub mod segment;

pub use body::*;
pub use event::*;
pub use segment::*;
