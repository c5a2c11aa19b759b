pub mod button;
pub mod container;
pub mod screens;

pub use button::{Icon, NavigationButton, PopToRootButton};
pub use container::ScreenId;
pub use screens::{Placement, Screen, ToolbarControl, ToolbarItem};
