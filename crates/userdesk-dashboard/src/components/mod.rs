//! Reusable UI components for the workstation panel

pub mod actions;
pub mod directory;
pub mod icons;
pub mod metrics;
pub mod pagination;
pub mod spinner;

pub use actions::*;
pub use directory::*;
pub use icons::*;
pub use metrics::*;
pub use pagination::*;
pub use spinner::*;
