pub mod header;
pub mod implementation;

pub use header::HeaderRenderer;
pub use implementation::ImplementationRenderer;

use crate::traits::SkeletonRenderer;

/// Renderers in the order their files are written: header first.
pub fn all_renderers() -> [&'static dyn SkeletonRenderer; 2] {
    [&HeaderRenderer, &ImplementationRenderer]
}
