//! Reusable UI components
//!
//! All components render plain class names styled by the app's global
//! stylesheet.

mod button;
mod card;
mod complexity_dots;
mod kolam_grid;
mod lifecycle_badge;

pub use button::*;
pub use card::*;
pub use complexity_dots::*;
pub use kolam_grid::*;
pub use lifecycle_badge::*;
