//! Page-level views

pub mod workstation;

pub use workstation::WorkstationPanel;
