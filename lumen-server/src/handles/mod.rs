mod forward_handle;

pub use forward_handle::*;
