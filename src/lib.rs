pub mod roles;
pub mod roster;
pub mod scoring;
pub mod settings;
pub mod utils;
