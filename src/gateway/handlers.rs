//! Gateway request handlers

pub mod health;
pub mod login;
pub mod signs;

pub use health::{HealthResponse, health_check};
pub use login::{LoginForm, login, login_form, logout};
pub use signs::{get_asset, get_program, get_scene, list_programs, list_signs};
