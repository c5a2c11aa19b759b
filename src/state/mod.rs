pub mod destination;
pub mod navigation;

pub use destination::Destination;
pub use navigation::NavigationPath;
