use crate::context::ParameterData;
use crate::layout::WrapperLayout;
use crate::traits::SkeletonRenderer;

/// Renders `parameter_wrapper.cpp`: includes the header and defines the
/// declared method with an empty body.
///
/// The output has no trailing newline.
pub struct ImplementationRenderer;

impl SkeletonRenderer for ImplementationRenderer {
    fn file_name<'a>(&self, layout: &'a WrapperLayout) -> &'a str {
        &layout.implementation_file
    }

    fn render(&self, layout: &WrapperLayout, _data: &ParameterData) -> String {
        format!(
            "#include \"{header}\"\n\
             namespace {namespace}{{void {class_name}::{signature}{{\n\
             }}}}",
            header = layout.header_file,
            namespace = layout.namespace,
            class_name = layout.class_name,
            signature = layout.method_signature(),
        )
    }
}
