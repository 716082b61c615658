pub mod context;
pub mod error;
pub mod generator;
pub mod layout;
pub mod traits;

// Per-file skeleton renderers
pub mod renderers;

// Re-exports
pub use context::ParameterData;
pub use error::CodegenError;
pub use generator::WrapperEmitter;
pub use layout::WrapperLayout;
pub use traits::SkeletonRenderer;
