pub mod add_new_brain_button;

pub use add_new_brain_button::AddNewBrainButton;
