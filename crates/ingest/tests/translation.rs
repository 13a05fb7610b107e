use ideinfo_api::models::{
    ApiFlavor, DependencyType, ExecutionRootPath, Kind, Label, TargetKey, TestSize,
};
use ideinfo_ingest::{RecordFormat, TranslateConfig, read_records, translate_all, translate_target, wire};
use serde_json::json;
use std::io::Write;

fn record(value: serde_json::Value) -> wire::TargetIdeInfo {
    serde_json::from_value(value).expect("valid record")
}

fn plain(label: &str) -> TargetKey {
    TargetKey::for_plain_target(Label::parse(label).unwrap())
}

#[test]
fn unrecognised_kind_yields_nothing() {
    for kind in ["", "made_up_rule"] {
        let message = record(json!({
            "label": "//foo:bar",
            "kind_string": kind,
            "java_ide_info": { "main_class": "foo.Main" }
        }));
        assert!(translate_target(&message).is_none());
    }
}

#[test]
fn invalid_label_yields_nothing() {
    let message = record(json!({ "label": "not a label", "kind_string": "java_library" }));
    assert!(translate_target(&message).is_none());
}

#[test]
fn structured_key_preferred_over_label() {
    let message = record(json!({
        "label": "//ignored:label",
        "key": { "label": "//foo:bar", "aspect_ids": ["//tools:ide.bzl%aspect"] },
        "kind_string": "java_library"
    }));
    let target = translate_target(&message).unwrap();
    assert_eq!(target.label().to_string(), "//foo:bar");
    assert_eq!(target.key.aspect_ids, vec!["//tools:ide.bzl%aspect"]);
    assert_eq!(target.kind, Kind::JavaLibrary);
}

#[test]
fn legacy_dependencies_put_compile_time_first() {
    let message = record(json!({
        "label": "//foo:bar",
        "kind_string": "java_library",
        "runtime_deps": ["//r:one", "//r:two"],
        "dependencies": ["//c:one", "//c:two"]
    }));
    let target = translate_target(&message).unwrap();
    let deps: Vec<(TargetKey, DependencyType)> = target
        .dependencies
        .iter()
        .map(|d| (d.target_key.clone(), d.dependency_type))
        .collect();
    assert_eq!(
        deps,
        vec![
            (plain("//c:one"), DependencyType::CompileTime),
            (plain("//c:two"), DependencyType::CompileTime),
            (plain("//r:one"), DependencyType::Runtime),
            (plain("//r:two"), DependencyType::Runtime),
        ]
    );
}

#[test]
fn unified_dependencies_take_precedence() {
    let message = record(json!({
        "label": "//foo:bar",
        "kind_string": "java_library",
        "dependencies": ["//legacy:ignored"],
        "deps": [
            { "target": { "label": "//a:a" }, "dependency_type": "RUNTIME" },
            { "target": { "label": "//b:b" }, "dependency_type": "SOMETHING_NEW" },
            { "target": { "label": "//c:c" } }
        ]
    }));
    let target = translate_target(&message).unwrap();
    let deps: Vec<_> = target
        .dependencies
        .iter()
        .map(|d| (d.target_key.label.to_string(), d.dependency_type))
        .collect();
    assert_eq!(
        deps,
        vec![
            ("//a:a".to_string(), DependencyType::Runtime),
            ("//b:b".to_string(), DependencyType::CompileTime),
            ("//c:c".to_string(), DependencyType::CompileTime),
        ]
    );
}

#[test]
fn sources_aggregated_from_c_java_and_python() {
    let message = record(json!({
        "label": "//mixed:target",
        "kind_string": "py_binary",
        "c_ide_info": { "source": [{ "relative_path": "mixed/native.cc", "is_source": true }] },
        "java_ide_info": { "sources": [{ "relative_path": "mixed/Main.java", "is_source": true }] },
        "py_ide_info": { "sources": [{ "relative_path": "mixed/main.py", "is_source": true }] },
        "android_ide_info": { "resources": [{ "relative_path": "mixed/res", "is_source": true }] }
    }));
    let target = translate_target(&message).unwrap();
    let sources: Vec<&str> = target.sources.iter().map(|s| s.relative_path.as_str()).collect();
    assert_eq!(sources, vec!["mixed/native.cc", "mixed/Main.java", "mixed/main.py"]);
    assert!(target.android_ide_info.is_some());
}

#[test]
fn legacy_external_sources_are_normalized() {
    let message = record(json!({
        "label": "@repo//pkg:lib",
        "kind_string": "java_library",
        "build_file_artifact_location": {
            "relative_path": "external/repo/pkg/BUILD",
            "is_source": true,
            "is_external": true
        },
        "java_ide_info": {
            "sources": [
                {
                    "relative_path": "repo/version/pkg/File.java",
                    "root_execution_path_fragment": "bazel-out",
                    "is_source": true,
                    "is_external": true
                },
                {
                    "relative_path": "pkg/Other.java",
                    "root_execution_path_fragment": "external/repo",
                    "is_source": true,
                    "is_external": true,
                    "is_new_external_version": true
                }
            ]
        }
    }));
    let target = translate_target(&message).unwrap();

    let build_file = target.build_file.as_ref().unwrap();
    assert_eq!(build_file.root_execution_path_fragment, "external/repo");
    assert_eq!(build_file.relative_path, "pkg/BUILD");

    assert_eq!(target.sources[0].root_execution_path_fragment, "bazel-out/repo/version");
    assert_eq!(target.sources[0].relative_path, "pkg/File.java");
    assert_eq!(target.sources[1].root_execution_path_fragment, "external/repo");
    assert_eq!(target.sources[1].relative_path, "pkg/Other.java");
}

#[test]
fn c_copts_become_local_defines_and_includes() {
    let message = record(json!({
        "label": "//native:lib",
        "kind_string": "cc_library",
        "c_ide_info": {
            "target_copt": ["-Dfoo=1", "-I", "bar/baz", "-Wall"],
            "transitive_define": ["TRANSITIVE"],
            "transitive_include_directory": ["include"],
            "transitive_quote_include_directory": ["."],
            "transitive_system_include_directory": ["third_party/sys"]
        }
    }));
    let target = translate_target(&message).unwrap();
    let c = target.c_ide_info.unwrap();
    assert_eq!(c.local_defines, vec!["foo=1"]);
    assert_eq!(c.local_include_directories, vec![ExecutionRootPath::new("bar/baz")]);
    assert_eq!(c.transitive_defines, vec!["TRANSITIVE"]);
    assert_eq!(c.transitive_include_directories, vec![ExecutionRootPath::new("include")]);
    assert_eq!(c.transitive_quote_include_directories, vec![ExecutionRootPath::new(".")]);
    assert_eq!(
        c.transitive_system_include_directories,
        vec![ExecutionRootPath::new("third_party/sys")]
    );
}

#[test]
fn stale_jars_are_dropped() {
    let message = record(json!({
        "label": "//java:lib",
        "kind_string": "java_library",
        "java_ide_info": {
            "jars": [
                { "source_jar": { "relative_path": "java/lib-src.jar" } },
                { "interface_jar": { "relative_path": "java/lib-ijar.jar" } }
            ],
            "filtered_gen_jar": {},
            "main_class": ""
        }
    }));
    let target = translate_target(&message).unwrap();
    let java = target.java_ide_info.unwrap();
    assert_eq!(java.jars.len(), 1);
    assert_eq!(
        java.jars[0].interface_jar().unwrap().relative_path,
        "java/lib-ijar.jar"
    );
    assert!(java.filtered_gen_jar.is_none());
    assert!(java.main_class.is_none());
}

#[test]
fn remaining_facets_translate() {
    let message = record(json!({
        "label": "//android:app",
        "kind_string": "android_binary",
        "tags": ["manual"],
        "android_ide_info": {
            "java_package": "com.example",
            "generate_resource_class": true,
            "legacy_resources": "//android:res",
            "manifest": { "relative_path": "android/AndroidManifest.xml", "is_source": true }
        },
        "android_sdk_ide_info": { "android_jar": { "relative_path": "sdk/android.jar" } },
        "test_info": { "size": "large" },
        "proto_library_legacy_java_ide_info": { "api_version": 1, "api_flavor": "IMMUTABLE" },
        "java_toolchain_ide_info": { "source_version": "8", "target_version": "11" }
    }));
    let target = translate_target(&message).unwrap();
    assert!(target.has_tag("manual"));

    let android = target.android_ide_info.unwrap();
    assert_eq!(android.java_package, "com.example");
    assert!(android.generate_resource_class);
    assert_eq!(android.legacy_resources, Some(Label::parse("//android:res").unwrap()));

    assert_eq!(
        target.android_sdk_ide_info.unwrap().android_jar.unwrap().relative_path,
        "sdk/android.jar"
    );
    assert_eq!(target.test_ide_info.unwrap().test_size, TestSize::Large);
    assert_eq!(
        target.proto_library_legacy_info.unwrap().api_flavor,
        ApiFlavor::Version1
    );
    let toolchain = target.java_toolchain_ide_info.unwrap();
    assert_eq!(toolchain.source_version, "8");
    assert_eq!(toolchain.target_version, "11");
}

#[test]
fn read_records_from_json_lines_file() {
    let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(file, r#"{{"label": "//a:a", "kind_string": "java_test"}}"#).unwrap();
    writeln!(file, r#"{{"label": "//b:b", "kind_string": "unknown"}}"#).unwrap();

    let format = RecordFormat::from_path(file.path());
    let records = read_records(file.path(), format).unwrap();
    let report = translate_all(&records, &TranslateConfig::default());
    assert_eq!(report.targets.len(), 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.targets[0].kind, Kind::JavaTest);
}
