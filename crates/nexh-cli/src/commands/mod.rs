//! Command implementations.

pub mod config;
pub mod demo;
pub mod normalize;
pub mod render;
pub mod run;
pub mod text;

pub use self::config::execute_config;
pub use self::demo::execute_demo;
pub use self::normalize::execute_normalize;
pub use self::render::execute_render;
pub use self::run::execute_run;
pub use self::text::{execute_clean, execute_mask};
