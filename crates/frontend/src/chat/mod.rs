pub mod components;
pub mod page;
