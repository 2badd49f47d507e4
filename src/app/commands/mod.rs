pub mod list;
pub mod select;
pub mod suggest;
pub mod validate;
