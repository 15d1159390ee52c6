mod compare;
mod error;
mod handle;
mod map;
mod members;
mod sequence;
mod step;

pub use compare::{Compare, Greater, Less};
pub use error::{Error, Result};
pub use handle::Handle;
pub use map::PriorityMap;
pub use step::Step;
