use ideinfo_runtime::{Config, read_targets, translate_file};
use std::fs;

#[test]
fn translate_and_reload_targets() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("targets.json");
    fs::write(
        &input,
        r#"[
            {"label": "//a:ATest", "kind_string": "java_test"},
            {"label": "//b:b", "kind_string": "no_such_rule"}
        ]"#,
    )
    .unwrap();

    let report = translate_file(&input, &Config::default()).unwrap();
    assert_eq!(report.targets.len(), 1);
    assert_eq!(report.skipped, 1);

    let output = dir.path().join("out.json");
    fs::write(&output, serde_json::to_vec(&report.targets).unwrap()).unwrap();
    let targets = read_targets(&output).unwrap();
    assert_eq!(targets, report.targets);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(translate_file(&dir.path().join("nope.json"), &Config::default()).is_err());
}

#[test]
fn stored_jar_without_class_or_interface_jar_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.json");
    fs::write(
        &path,
        r#"[{
            "key": {"label": "//java:lib"},
            "kind": "java_library",
            "build_file": null,
            "dependencies": [],
            "tags": [],
            "sources": [],
            "java_ide_info": {
                "jars": [{"interface_jar": null, "class_jar": null, "source_jar": null}],
                "generated_jars": [],
                "filtered_gen_jar": null,
                "package_manifest": null,
                "jdeps": null,
                "main_class": null
            }
        }]"#,
    )
    .unwrap();

    let err = read_targets(&path).unwrap_err();
    assert!(err.to_string().contains("interface or class jar"));
}
