pub mod form;
pub mod water;
