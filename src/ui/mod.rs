pub mod panels;
pub mod views;
pub mod workbench;
