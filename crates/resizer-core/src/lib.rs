pub mod bitmap;
pub mod command;
pub mod config;
pub mod consts;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod frontend;
pub mod io;
pub mod session;
