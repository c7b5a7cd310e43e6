mod dispatch;
mod frontend;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_log};
pub(crate) use frontend::RfdFrontend;
