mod accessory_handle;
mod characteristic_handle;
mod sse_handle;

pub use accessory_handle::*;
pub use characteristic_handle::*;
pub use sse_handle::*;

use std::sync::Arc;

use crate::services::AccessoryRegistry;

#[derive(Clone)]
pub struct AccessoryState {
    pub registry: Arc<AccessoryRegistry>,
}
