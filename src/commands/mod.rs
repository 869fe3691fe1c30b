pub mod literal;
pub mod render;
pub mod validate;

// Re-export all command functions
pub use literal::cmd_literal;
pub use render::cmd_render;
pub use validate::cmd_validate;
