use std::path::{Component, Path};

use crate::error::CodegenError;

/// Default header file name.
pub const HEADER_FILE_NAME: &str = "parameter_wrapper.h";
/// Default implementation file name.
pub const IMPLEMENTATION_FILE_NAME: &str = "parameter_wrapper.cpp";

/// Names baked into the generated C++ skeleton.
///
/// [`WrapperLayout::default`] is the layout the tool ships with; the
/// downstream build expects exactly the text it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperLayout {
    /// Include-guard symbol (e.g., "_PARAMETER_WRAPPER_H_")
    pub guard: String,
    /// Header pulled in by the generated header (e.g., "<string>")
    pub string_include: String,
    /// Namespace wrapping every generated declaration
    pub namespace: String,
    /// External type forward-declared inside the namespace
    pub settings_type: String,
    /// The single generated class
    pub class_name: String,
    /// The single public method of that class
    pub method_name: String,
    /// Name of the method's only parameter
    pub param_name: String,
    /// Output header file name
    pub header_file: String,
    /// Output implementation file name
    pub implementation_file: String,
}

impl Default for WrapperLayout {
    fn default() -> Self {
        Self {
            guard: "_PARAMETER_WRAPPER_H_".into(),
            string_include: "<string>".into(),
            namespace: "cura52".into(),
            settings_type: "Settings".into(),
            class_name: "SceneParamWrapper1".into(),
            method_name: "initialize".into(),
            param_name: "settings".into(),
            header_file: HEADER_FILE_NAME.into(),
            implementation_file: IMPLEMENTATION_FILE_NAME.into(),
        }
    }
}

impl WrapperLayout {
    /// Signature shared by the declaration and the definition,
    /// e.g. `initialize(Settings* settings)`.
    pub fn method_signature(&self) -> String {
        format!(
            "{}({}* {})",
            self.method_name, self.settings_type, self.param_name
        )
    }

    /// Both output names must be plain file names (no separators, no `..`)
    /// and must differ, so each file lands directly in the destination.
    pub fn check_file_names(&self) -> Result<(), CodegenError> {
        for name in [&self.header_file, &self.implementation_file] {
            if !is_plain_file_name(name) {
                return Err(CodegenError::InvalidFileName { name: name.clone() });
            }
        }
        if self.header_file == self.implementation_file {
            return Err(CodegenError::DuplicateFileName {
                name: self.header_file.clone(),
            });
        }
        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
