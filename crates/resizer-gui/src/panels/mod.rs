pub mod form;
pub mod preview;
pub mod status;
