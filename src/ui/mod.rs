/// Presentation layer: egui panels and the three dashboard pages.

pub mod goals;
pub mod home;
pub mod panels;
pub mod plot;
pub mod predict;
pub mod table;
