pub mod dispatch;
pub mod requests;

pub use dispatch::Dispatcher;
pub use requests::{Payload, Request, Response};
