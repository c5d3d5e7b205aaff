pub mod timer;
pub mod window;
