// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod common;

use common::{create_device_file, create_test_environment, write_spec_file};
use rgn_carrier::{Regionalization, SpecFileError};
use rgn_core::{
    media::{MediaFile, MediaState, MediaType},
    Configuration,
};
use std::fs;

const TWO_CARRIERS: &str =
    "packStorage=/data/speccfg\npackCount=2\nstrSpec1=carrierA\nstrSpec2=carrierB\n";

#[test]
fn is_supported_requires_property_to_be_true() {
    let root = tempfile::tempdir().unwrap();

    let env = create_test_environment(root.path(), &[("ro.regionalization.support", "true")]);
    assert!(Regionalization::is_supported(&env));
    assert!(Regionalization::is_supported(&env));

    let env = create_test_environment(root.path(), &[("ro.regionalization.support", "TRUE")]);
    assert!(!Regionalization::is_supported(&env));

    let env = create_test_environment(root.path(), &[("ro.regionalization.support", "false")]);
    assert!(!Regionalization::is_supported(&env));

    let env = create_test_environment(root.path(), &[]);
    assert!(!Regionalization::is_supported(&env));
}

#[test]
fn construction_does_not_load() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    let env = create_test_environment(root.path(), &[]);

    let regionalization = Regionalization::from(&env);

    assert!(!regionalization.is_loaded());
    assert!(regionalization.packages().is_empty());
    assert_eq!(
        regionalization.spec_file(),
        root.path().join("persist").join("speccfg").join("spec")
    );
}

#[test]
fn loads_packages_in_file_order() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    let env = create_test_environment(root.path(), &[]);

    let mut regionalization = Regionalization::from(&env);

    assert!(regionalization.load_packages_from_spec_file());
    assert!(regionalization.is_loaded());
    assert_eq!(regionalization.packages(), &["carrierA", "carrierB"]);
    assert_eq!(
        regionalization.storage_location(),
        Some(root.path().join("data").join("speccfg").as_path())
    );
}

#[test]
fn load_constructor_loads_immediately() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    let env = create_test_environment(root.path(), &[]);

    let regionalization = Regionalization::load(&env);

    assert!(regionalization.is_loaded());
    assert_eq!(regionalization.packages().len(), 2);
}

#[test]
fn missing_spec_file_fails_and_lookups_are_absent() {
    let root = tempfile::tempdir().unwrap();
    let env = create_test_environment(root.path(), &[]);
    create_device_file(
        root.path(),
        "data/speccfg/carrierA/system/media/bootanimation.zip",
    );

    let mut regionalization = Regionalization::from(&env);

    assert!(!regionalization.load_packages_from_spec_file());
    assert!(matches!(
        regionalization.try_load_packages_from_spec_file(),
        Err(SpecFileError::NotFound(_))
    ));
    assert!(!regionalization.is_loaded());
    assert_eq!(regionalization.get_media_file(0, 0), None);
    assert_eq!(regionalization.get_overlay_dir(), None);
}

#[test]
fn reloading_replaces_previous_packages() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());

    write_spec_file(
        root.path(),
        "packStorage=/system/vendor/speccfg\npackCount=1\nstrSpec1=carrierC\n",
    );

    assert!(regionalization.load_packages_from_spec_file());
    assert_eq!(regionalization.packages(), &["carrierC"]);
    assert_eq!(
        regionalization.storage_location(),
        Some(
            root.path()
                .join("system")
                .join("vendor")
                .join("speccfg")
                .as_path()
        )
    );
}

#[test]
fn failed_reload_clears_previous_state() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    create_device_file(root.path(), "data/speccfg/carrierA/system/media/boot.wav");
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());
    assert!(regionalization.get_media_file(1, 0).is_some());

    write_spec_file(root.path(), "packStorage=/data/speccfg\npackCount=many\n");

    assert!(!regionalization.load_packages_from_spec_file());
    assert!(!regionalization.is_loaded());
    assert!(regionalization.packages().is_empty());
    assert_eq!(regionalization.storage_location(), None);
    assert_eq!(regionalization.get_media_file(1, 0), None);
}

#[test]
fn empty_spec_file_loads_without_packages() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), "");
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);

    assert!(regionalization.load_packages_from_spec_file());
    assert!(regionalization.packages().is_empty());
    for media in MediaFile::ALL {
        assert_eq!(regionalization.find_media_file(media), None);
    }
    assert_eq!(regionalization.get_overlay_dir(), None);
}

#[test]
fn media_file_prefers_first_package_in_file_order() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    let first = create_device_file(
        root.path(),
        "data/speccfg/carrierA/system/media/bootanimation.zip",
    );
    create_device_file(
        root.path(),
        "data/speccfg/carrierB/system/media/bootanimation.zip",
    );
    let second = create_device_file(
        root.path(),
        "data/speccfg/carrierB/system/media/shutdown.wav",
    );
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());

    assert_eq!(regionalization.get_media_file(0, 0), Some(first));
    assert_eq!(
        regionalization.find_media_file(MediaFile::new(MediaType::Audio, MediaState::Shutdown)),
        Some(second)
    );
}

#[test]
fn media_file_without_matching_record_is_absent() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    create_device_file(
        root.path(),
        "data/speccfg/carrierA/system/media/bootanimation.zip",
    );
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());

    // Only the boot animation exists.
    assert_eq!(regionalization.get_media_file(0, 1), None);
    assert_eq!(regionalization.get_media_file(1, 0), None);
    assert_eq!(regionalization.get_media_file(1, 1), None);
    // Unknown codes.
    assert_eq!(regionalization.get_media_file(2, 0), None);
    assert_eq!(regionalization.get_media_file(0, 5), None);
    assert_eq!(regionalization.get_media_file(-1, -1), None);
}

#[test]
fn overlay_dir_prefers_first_package_in_file_order() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    create_device_file(
        root.path(),
        "data/speccfg/carrierA/system/vendor/overlay/carrierAFrameworksRes/res.apk",
    );
    create_device_file(
        root.path(),
        "data/speccfg/carrierB/system/vendor/overlay/carrierBFrameworksRes/res.apk",
    );
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());

    assert_eq!(
        regionalization.get_overlay_dir(),
        Some(
            root.path()
                .join("data/speccfg/carrierA/system/vendor/overlay")
        )
    );
}

#[test]
fn overlay_dir_requires_framework_res_overlay() {
    let root = tempfile::tempdir().unwrap();
    write_spec_file(root.path(), TWO_CARRIERS);
    // carrierA only has an overlay directory, without its FrameworksRes overlay.
    fs::create_dir_all(
        root.path()
            .join("data/speccfg/carrierA/system/vendor/overlay/carrierBFrameworksRes"),
    )
    .unwrap();
    create_device_file(
        root.path(),
        "data/speccfg/carrierB/system/vendor/overlay/carrierBFrameworksRes",
    );
    let env = create_test_environment(root.path(), &[]);
    let mut regionalization = Regionalization::from(&env);
    assert!(regionalization.load_packages_from_spec_file());

    assert_eq!(
        regionalization.get_overlay_dir(),
        Some(
            root.path()
                .join("data/speccfg/carrierB/system/vendor/overlay")
        )
    );
}

#[test]
fn spec_file_location_can_be_configured() {
    let root = tempfile::tempdir().unwrap();
    create_device_file(root.path(), "vendor/speccfg/spec");
    fs::write(
        root.path().join("vendor/speccfg/spec"),
        "packStorage=/vendor/speccfg\npackCount=1\nstrSpec1=Default\n",
    )
    .unwrap();
    let env = create_test_environment(root.path(), &[]);
    let config = Configuration {
        spec_file: Some("/vendor/speccfg/spec".into()),
        ..Default::default()
    };

    let mut regionalization = Regionalization::from_config(&env, &config);

    assert_eq!(
        regionalization.spec_file(),
        root.path().join("vendor/speccfg/spec")
    );
    assert!(regionalization.load_packages_from_spec_file());
    assert_eq!(regionalization.packages(), &["Default"]);
}
