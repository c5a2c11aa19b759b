// Destinations reachable above the root screen

/// A screen that can be pushed onto the navigation path.
///
/// The root screen is implicit: it is shown whenever the path is empty and
/// is never a member of this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Page1,
    Page2,
    Page3,
    Settings,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Page1,
        Destination::Page2,
        Destination::Page3,
        Destination::Settings,
    ];

    /// Navigation bar title of the screen this destination routes to.
    pub fn title(self) -> &'static str {
        match self {
            Destination::Page1 => "Page 1",
            Destination::Page2 => "Page 2",
            Destination::Page3 => "Page 3",
            Destination::Settings => "Settings",
        }
    }
}
