pub mod background;
pub mod form;
pub mod social;
