// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rgn_core::os_environment::Environment;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

pub struct TestEnvironment {
    pub root: Option<PathBuf>,
    pub properties: HashMap<String, String>,
}

impl Environment for TestEnvironment {
    fn get_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
    fn get_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

#[allow(dead_code)]
pub fn create_test_environment(root: &Path, properties: &[(&str, &str)]) -> TestEnvironment {
    TestEnvironment {
        root: Some(root.to_path_buf()),
        properties: properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// Writes the spec file at its well known location under `root`.
#[allow(dead_code)]
pub fn write_spec_file(root: &Path, contents: &str) {
    let spec = root.join("persist").join("speccfg").join("spec");
    fs::create_dir_all(spec.parent().unwrap()).unwrap();
    fs::write(spec, contents).unwrap();
}

/// Creates `relative` (a device path such as `data/speccfg/carrierA/system/media/boot.wav`) under `root`.
#[allow(dead_code)]
pub fn create_device_file(root: &Path, relative: &str) -> PathBuf {
    let file = root.join(relative);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, b"").unwrap();
    file
}
