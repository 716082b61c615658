use crate::context::ParameterData;
use crate::layout::WrapperLayout;

/// Produces the full text of one generated C++ file.
pub trait SkeletonRenderer {
    /// Output file name for this renderer under the given layout.
    fn file_name<'a>(&self, layout: &'a WrapperLayout) -> &'a str;

    /// Render the complete file contents.
    ///
    /// `data` is accepted for future per-parameter output; current
    /// renderers ignore it.
    fn render(&self, layout: &WrapperLayout, data: &ParameterData) -> String;
}
