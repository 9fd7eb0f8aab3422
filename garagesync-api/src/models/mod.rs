mod accessory;
mod door;

pub use accessory::*;
pub use door::*;
