pub mod engine;
pub mod submit;
pub mod update;
pub mod versions;
