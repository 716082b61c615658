use crate::context::ParameterData;
use crate::layout::WrapperLayout;
use crate::traits::SkeletonRenderer;

/// Renders `parameter_wrapper.h`: include guard, one include, the
/// namespace with its forward declaration, and one single-method class.
pub struct HeaderRenderer;

impl SkeletonRenderer for HeaderRenderer {
    fn file_name<'a>(&self, layout: &'a WrapperLayout) -> &'a str {
        &layout.header_file
    }

    fn render(&self, layout: &WrapperLayout, _data: &ParameterData) -> String {
        format!(
            "#ifndef {guard}\n\
             #define {guard}\n\
             #include {include}\n\
             namespace {namespace}{{class {settings};\n\
             class {class_name}{{public:\n\
             void {signature};\n\
             }};\n\
             }}\n\
             #endif //{guard}\n",
            guard = layout.guard,
            include = layout.string_include,
            namespace = layout.namespace,
            settings = layout.settings_type,
            class_name = layout.class_name,
            signature = layout.method_signature(),
        )
    }
}
