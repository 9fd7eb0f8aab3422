mod accessory_service;
mod characteristic;
mod controller_service;
mod door_service;
mod poll_timer;

pub use accessory_service::*;
pub use characteristic::*;
pub use controller_service::*;
pub use door_service::*;
pub use poll_timer::*;
