//! A stack-based navigation shell for egui applications.
//!
//! [`app::NavShell`] owns a [`state::NavigationPath`] and lends it to the
//! container in [`view::container`] each frame. Screens push destinations
//! through their toolbar buttons; Page 3 pops back to the root.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod state;
pub mod style;
pub mod view;
