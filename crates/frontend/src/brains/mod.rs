pub mod add_brain_modal;
pub mod page;
