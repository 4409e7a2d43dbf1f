pub mod csv;
pub mod hud;
pub mod json;
