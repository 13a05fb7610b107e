//! Conversion from aspect records to the IDE target model.
//!
//! Translation never fails loudly: a record without a recognised kind or a
//! usable label produces no target, and references to files that no longer
//! exist are dropped from their lists.

use crate::options::UnfilteredCompilerOptions;
use crate::wire::{self, DependencyEncoding, ExternalPathEncoding};
use ideinfo_api::models::{
    AndroidIdeInfo, AndroidSdkIdeInfo, ApiFlavor, ArtifactLocation, CIdeInfo, CToolchainIdeInfo,
    Dependency, DependencyType, ExecutionRootPath, JavaIdeInfo, JavaToolchainIdeInfo, Kind, Label,
    LibraryArtifact, ProtoLibraryLegacyInfo, PyIdeInfo, TargetIdeInfo, TargetKey, TestIdeInfo,
    TestSize,
};
use tracing::debug;

/// Translate one aspect record. Returns `None` for records that cannot be
/// turned into a complete target.
pub fn translate_target(message: &wire::TargetIdeInfo) -> Option<TargetIdeInfo> {
    let Some(kind) = get_kind(message) else {
        debug!(
            label = %message.label,
            kind = %message.kind_string,
            "skipping record with unrecognised kind"
        );
        return None;
    };
    let key = get_key(message)?;
    let build_file = message
        .build_file_artifact_location
        .as_ref()
        .map(make_artifact_location);
    let dependencies = make_dependencies(message);

    let mut sources = Vec::new();

    let c_ide_info = message.c_ide_info.as_ref().map(make_c_ide_info);
    if let Some(info) = &c_ide_info {
        sources.extend(info.sources.iter().cloned());
    }
    let c_toolchain_ide_info = message
        .c_toolchain_ide_info
        .as_ref()
        .map(make_c_toolchain_ide_info);
    let java_ide_info = message.java_ide_info.as_ref().map(|java| {
        sources.extend(make_artifact_location_list(&java.sources));
        make_java_ide_info(java)
    });
    let android_ide_info = message.android_ide_info.as_ref().map(make_android_ide_info);
    let android_sdk_ide_info = message
        .android_sdk_ide_info
        .as_ref()
        .map(make_android_sdk_ide_info);
    let py_ide_info = message.py_ide_info.as_ref().map(make_py_ide_info);
    if let Some(info) = &py_ide_info {
        sources.extend(info.sources.iter().cloned());
    }
    let test_ide_info = message.test_info.as_ref().map(make_test_ide_info);
    let proto_library_legacy_info = message
        .proto_library_legacy_java_ide_info
        .as_ref()
        .map(make_proto_library_legacy_info);
    let java_toolchain_ide_info = message
        .java_toolchain_ide_info
        .as_ref()
        .map(make_java_toolchain_ide_info);

    Some(
        TargetIdeInfo::builder(key, kind)
            .build_file(build_file)
            .dependencies(dependencies)
            .tags(message.tags.iter().cloned())
            .sources(sources)
            .c_ide_info(c_ide_info)
            .c_toolchain_ide_info(c_toolchain_ide_info)
            .java_ide_info(java_ide_info)
            .android_ide_info(android_ide_info)
            .android_sdk_ide_info(android_sdk_ide_info)
            .py_ide_info(py_ide_info)
            .test_ide_info(test_ide_info)
            .proto_library_legacy_info(proto_library_legacy_info)
            .java_toolchain_ide_info(java_toolchain_ide_info)
            .build(),
    )
}

fn get_kind(message: &wire::TargetIdeInfo) -> Option<Kind> {
    if message.kind_string.is_empty() {
        return None;
    }
    Kind::from_kind_string(&message.kind_string)
}

fn get_key(message: &wire::TargetIdeInfo) -> Option<TargetKey> {
    match &message.key {
        Some(key) => make_target_key(key),
        None => match Label::parse(&message.label) {
            Ok(label) => Some(TargetKey::for_plain_target(label)),
            Err(e) => {
                debug!(error = %e, "skipping record without a usable label");
                None
            }
        },
    }
}

fn make_target_key(key: &wire::TargetKey) -> Option<TargetKey> {
    match Label::parse(&key.label) {
        Ok(label) => Some(TargetKey::for_general_target(label, key.aspect_ids.clone())),
        Err(e) => {
            debug!(error = %e, "ignoring target key with invalid label");
            None
        }
    }
}

fn make_dependencies(message: &wire::TargetIdeInfo) -> Vec<Dependency> {
    match message.dependency_encoding() {
        DependencyEncoding::Unified => message.deps.iter().filter_map(make_dependency).collect(),
        DependencyEncoding::Legacy => {
            let mut dependencies =
                Vec::with_capacity(message.dependencies.len() + message.runtime_deps.len());
            dependencies.extend(make_dependency_list_from_label_list(
                &message.dependencies,
                DependencyType::CompileTime,
            ));
            dependencies.extend(make_dependency_list_from_label_list(
                &message.runtime_deps,
                DependencyType::Runtime,
            ));
            dependencies
        }
    }
}

fn make_dependency_list_from_label_list(
    labels: &[String],
    dependency_type: DependencyType,
) -> impl Iterator<Item = Dependency> + '_ {
    labels.iter().filter_map(move |dep| match Label::parse(dep) {
        Ok(label) => Some(Dependency::new(
            TargetKey::for_plain_target(label),
            dependency_type,
        )),
        Err(e) => {
            debug!(error = %e, "ignoring dependency with invalid label");
            None
        }
    })
}

fn make_dependency(dep: &wire::Dependency) -> Option<Dependency> {
    let key = make_target_key(dep.target.as_ref()?)?;
    Some(Dependency::new(key, make_dependency_type(dep.dependency_type)))
}

fn make_dependency_type(dependency_type: wire::DependencyType) -> DependencyType {
    match dependency_type {
        wire::DependencyType::Runtime => DependencyType::Runtime,
        wire::DependencyType::CompileTime | wire::DependencyType::Unrecognized => {
            DependencyType::CompileTime
        }
    }
}

fn make_c_ide_info(info: &wire::CIdeInfo) -> CIdeInfo {
    let (local_defines, local_include_directories) = if info.target_copt.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let options = UnfilteredCompilerOptions::builder()
            .register_single_or_split_option("-D")
            .register_single_or_split_option("-I")
            .build(&info.target_copt);
        (
            options.extracted_option_values("-D").to_vec(),
            make_execution_root_path_list(options.extracted_option_values("-I")),
        )
    };

    CIdeInfo {
        sources: make_artifact_location_list(&info.source),
        local_defines,
        local_include_directories,
        transitive_include_directories: make_execution_root_path_list(
            &info.transitive_include_directory,
        ),
        transitive_quote_include_directories: make_execution_root_path_list(
            &info.transitive_quote_include_directory,
        ),
        transitive_defines: info.transitive_define.clone(),
        transitive_system_include_directories: make_execution_root_path_list(
            &info.transitive_system_include_directory,
        ),
    }
}

fn make_c_toolchain_ide_info(info: &wire::CToolchainIdeInfo) -> CToolchainIdeInfo {
    let options = UnfilteredCompilerOptions::builder()
        .register_single_or_split_option("-isystem")
        .build(&info.unfiltered_compiler_option);
    let unfiltered_toolchain_system_includes =
        make_execution_root_path_list(options.extracted_option_values("-isystem"));

    CToolchainIdeInfo {
        base_compiler_options: info.base_compiler_option.clone(),
        c_compiler_options: info.c_option.clone(),
        cpp_compiler_options: info.cpp_option.clone(),
        link_options: info.link_option.clone(),
        built_in_include_directories: make_execution_root_path_list(
            &info.built_in_include_directory,
        ),
        cpp_executable: ExecutionRootPath::new(&info.cpp_executable),
        preprocessor_executable: ExecutionRootPath::new(&info.preprocessor_executable),
        target_name: info.target_name.clone(),
        unfiltered_compiler_options: options.into_uninterpreted_options(),
        unfiltered_toolchain_system_includes,
    }
}

fn make_execution_root_path_list(paths: &[String]) -> Vec<ExecutionRootPath> {
    paths.iter().map(ExecutionRootPath::new).collect()
}

fn make_java_ide_info(info: &wire::JavaIdeInfo) -> JavaIdeInfo {
    JavaIdeInfo {
        jars: make_library_artifact_list(&info.jars),
        generated_jars: make_library_artifact_list(&info.generated_jars),
        filtered_gen_jar: info
            .filtered_gen_jar
            .as_ref()
            .and_then(make_library_artifact),
        package_manifest: info.package_manifest.as_ref().map(make_artifact_location),
        jdeps: info.jdeps.as_ref().map(make_artifact_location),
        main_class: non_empty(&info.main_class),
    }
}

fn make_android_ide_info(info: &wire::AndroidIdeInfo) -> AndroidIdeInfo {
    let legacy_resources = if info.legacy_resources.is_empty() {
        None
    } else {
        Label::parse(&info.legacy_resources)
            .map_err(|e| debug!(error = %e, "ignoring invalid legacy resources label"))
            .ok()
    };

    AndroidIdeInfo {
        resources: make_artifact_location_list(&info.resources),
        java_package: info.java_package.clone(),
        generate_resource_class: info.generate_resource_class,
        manifest: info.manifest.as_ref().map(make_artifact_location),
        idl_jar: info.idl_jar.as_ref().and_then(make_library_artifact),
        resource_jar: info.resource_jar.as_ref().and_then(make_library_artifact),
        has_idl_sources: info.has_idl_sources,
        legacy_resources,
    }
}

fn make_android_sdk_ide_info(info: &wire::AndroidSdkIdeInfo) -> AndroidSdkIdeInfo {
    AndroidSdkIdeInfo {
        android_jar: info.android_jar.as_ref().map(make_artifact_location),
    }
}

fn make_py_ide_info(info: &wire::PyIdeInfo) -> PyIdeInfo {
    PyIdeInfo {
        sources: make_artifact_location_list(&info.sources),
    }
}

fn make_test_ide_info(info: &wire::TestInfo) -> TestIdeInfo {
    TestIdeInfo::new(TestSize::from_attribute(&info.size).unwrap_or_default())
}

fn make_proto_library_legacy_info(
    info: &wire::ProtoLibraryLegacyJavaIdeInfo,
) -> ProtoLibraryLegacyInfo {
    let api_flavor = if info.api_version == 1 {
        ApiFlavor::Version1
    } else {
        match info.api_flavor {
            wire::ApiFlavor::Mutable => ApiFlavor::Mutable,
            wire::ApiFlavor::Immutable => ApiFlavor::Immutable,
            wire::ApiFlavor::Both => ApiFlavor::Both,
            wire::ApiFlavor::Unrecognized => ApiFlavor::None,
        }
    };

    ProtoLibraryLegacyInfo {
        api_flavor,
        jars1: make_library_artifact_list(&info.jars1),
        jars_mutable: make_library_artifact_list(&info.jars_mutable),
        jars_immutable: make_library_artifact_list(&info.jars_immutable),
    }
}

fn make_java_toolchain_ide_info(info: &wire::JavaToolchainIdeInfo) -> JavaToolchainIdeInfo {
    JavaToolchainIdeInfo {
        source_version: info.source_version.clone(),
        target_version: info.target_version.clone(),
    }
}

fn make_library_artifact_list(jars: &[wire::LibraryArtifact]) -> Vec<LibraryArtifact> {
    jars.iter().filter_map(make_library_artifact).collect()
}

/// `None` when neither jar is known, i.e. the files are gone since the build.
pub fn make_library_artifact(artifact: &wire::LibraryArtifact) -> Option<LibraryArtifact> {
    let class_jar = artifact.jar.as_ref().map(make_artifact_location);
    let interface_jar = artifact.interface_jar.as_ref().map(make_artifact_location);
    let source_jar = artifact.source_jar.as_ref().map(make_artifact_location);
    let lib = LibraryArtifact::new(interface_jar, class_jar, source_jar);
    if lib.is_none() {
        debug!("dropping library artifact without interface or class jar");
    }
    lib
}

fn make_artifact_location_list(locations: &[wire::ArtifactLocation]) -> Vec<ArtifactLocation> {
    locations.iter().map(make_artifact_location).collect()
}

/// Converts a wire location, moving the repository prefix of legacy external
/// paths into the root fragment.
pub fn make_artifact_location(location: &wire::ArtifactLocation) -> ArtifactLocation {
    let mut relative_path = location.relative_path.clone();
    let mut root_fragment = location.root_execution_path_fragment.clone();

    if location.is_external && location.external_path_encoding() == ExternalPathEncoding::Legacy {
        // Always '/'-separated, regardless of platform. Empty segments do not count.
        let components: Vec<&str> = location
            .relative_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if components.len() > 2 {
            let prefix = format!("{}/{}", components[0], components[1]);
            relative_path = components[2..].join("/");
            root_fragment = if root_fragment.is_empty() {
                prefix
            } else {
                format!("{}/{}", root_fragment, prefix)
            };
        }
    }

    ArtifactLocation::builder()
        .root_execution_path_fragment(root_fragment)
        .relative_path(relative_path)
        .is_source(location.is_source)
        .is_external(location.is_external)
        .build()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
