pub mod tabs;

pub use tabs::{TabGroup, TabList, TabTrigger};
