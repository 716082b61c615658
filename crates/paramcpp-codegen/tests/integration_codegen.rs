use std::path::Path;

use paramcpp_codegen::{CodegenError, WrapperEmitter, WrapperLayout};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const EXPECTED_HEADER: &str = "#ifndef _PARAMETER_WRAPPER_H_
#define _PARAMETER_WRAPPER_H_
#include <string>
namespace cura52{class Settings;
class SceneParamWrapper1{public:
void initialize(Settings* settings);
};
}
#endif //_PARAMETER_WRAPPER_H_
";

const EXPECTED_IMPLEMENTATION: &str = "#include \"parameter_wrapper.h\"
namespace cura52{void SceneParamWrapper1::initialize(Settings* settings){
}}";

fn generate_into(dest: &Path, jsons: &str) {
    let mut emitter = WrapperEmitter::new("params", dest)
        .unwrap_or_else(|e| panic!("Failed to open emitter in '{}': {}", dest.display(), e));
    emitter.generate(jsons).unwrap();
    emitter.close().unwrap();
}

fn read(dest: &Path, name: &str) -> String {
    std::fs::read_to_string(dest.join(name))
        .unwrap_or_else(|e| panic!("Failed to read '{}': {}", name, e))
}

#[test]
fn test_generates_exactly_two_files() {
    let tmp = TempDir::new().unwrap();
    generate_into(tmp.path(), "anything.json");

    let mut names: Vec<String> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["parameter_wrapper.cpp", "parameter_wrapper.h"]);

    assert_eq!(read(tmp.path(), "parameter_wrapper.h"), EXPECTED_HEADER);
    assert_eq!(
        read(tmp.path(), "parameter_wrapper.cpp"),
        EXPECTED_IMPLEMENTATION
    );
}

#[test]
fn test_output_independent_of_json_argument() {
    let json_dir = TempDir::new().unwrap();
    let valid_json = json_dir.path().join("params.json");
    std::fs::write(&valid_json, r#"{"layer_height": {"default_value": 0.2}}"#).unwrap();
    let valid_json = valid_json.to_string_lossy().into_owned();

    for jsons in ["", "/nonexistent/path.json", "{not json", valid_json.as_str()] {
        let tmp = TempDir::new().unwrap();
        generate_into(tmp.path(), jsons);
        assert_eq!(read(tmp.path(), "parameter_wrapper.h"), EXPECTED_HEADER);
        assert_eq!(
            read(tmp.path(), "parameter_wrapper.cpp"),
            EXPECTED_IMPLEMENTATION
        );
    }
}

#[test]
fn test_rerun_replaces_existing_content() {
    let tmp = TempDir::new().unwrap();
    let long = "x".repeat(4096);
    std::fs::write(tmp.path().join("parameter_wrapper.h"), &long).unwrap();
    std::fs::write(tmp.path().join("parameter_wrapper.cpp"), &long).unwrap();

    generate_into(tmp.path(), "a.json");
    generate_into(tmp.path(), "b.json");

    assert_eq!(read(tmp.path(), "parameter_wrapper.h"), EXPECTED_HEADER);
    assert_eq!(
        read(tmp.path(), "parameter_wrapper.cpp"),
        EXPECTED_IMPLEMENTATION
    );
}

#[test]
fn test_missing_dest_dir_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("out");

    let result = WrapperEmitter::new("params", &missing);
    assert!(result.is_err());
    assert!(!missing.exists());
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_dropping_emitter_flushes_output() {
    let tmp = TempDir::new().unwrap();
    {
        let mut emitter = WrapperEmitter::new("params", tmp.path()).unwrap();
        emitter.generate("anything.json").unwrap();
    }
    assert_eq!(read(tmp.path(), "parameter_wrapper.h"), EXPECTED_HEADER);
}

#[test]
fn test_colliding_file_names_keep_existing_header() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("parameter_wrapper.h"), EXPECTED_HEADER).unwrap();

    let layout = WrapperLayout {
        implementation_file: "parameter_wrapper.h".into(),
        ..WrapperLayout::default()
    };
    let err = WrapperEmitter::with_layout("params", tmp.path(), layout).unwrap_err();
    assert!(matches!(err, CodegenError::DuplicateFileName { .. }));
    assert_eq!(read(tmp.path(), "parameter_wrapper.h"), EXPECTED_HEADER);
}

#[test]
fn test_file_names_cannot_leave_dest_dir() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("out");
    std::fs::create_dir(&dest).unwrap();

    for escaping in ["../escaped.h", "nested/escaped.h"] {
        let layout = WrapperLayout {
            header_file: escaping.into(),
            ..WrapperLayout::default()
        };
        let err = WrapperEmitter::with_layout("params", &dest, layout).unwrap_err();
        assert!(
            matches!(err, CodegenError::InvalidFileName { ref name } if name == escaping),
            "unexpected error for '{}': {}",
            escaping,
            err
        );
    }
    assert!(!tmp.path().join("escaped.h").exists());
    assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
}
