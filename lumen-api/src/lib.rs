//! Wire types shared by the Lumen device core, the forwarding endpoint and
//! the light sensor publisher.

pub mod catalog;
pub mod forward;
pub mod notification;
pub mod push;

pub use catalog::{GroupCatalog, Origin, OriginGroups};
pub use forward::ForwardQuery;
pub use notification::{BigTextStyle, NotificationContent, WearNotification};
pub use push::{GcmMessage, PushData, PushRequest};
