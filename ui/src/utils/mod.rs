pub mod colors;
pub mod devices;
pub mod drop_handler;
pub mod indicator_driver;
