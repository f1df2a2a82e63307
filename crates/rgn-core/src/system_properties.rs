// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

lazy_static! {
    static ref PROPERTY: Regex = Regex::new(r"^\s*([^#=\s][^=]*?)\s*=\s*(.*?)\s*$")
        .expect("error parsing property regex for system properties");
}

/// Property files of a stock image, in the order init loads them.
pub static DEFAULT_PROPERTY_FILES: &[&str] = &[
    "/default.prop",
    "/system/build.prop",
    "/vendor/build.prop",
    "/odm/build.prop",
];

/// System properties read from `key=value` property files.
///
/// Read-only (`ro.*`) properties cannot be overridden once set, so the first definition of a key wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SystemProperties {
    values: HashMap<String, String>,
}

impl SystemProperties {
    pub fn from_files(files: &[PathBuf]) -> Self {
        let mut props = SystemProperties::default();
        for file in files {
            props.load_file(file);
        }
        props
    }

    pub fn parse(contents: &str) -> Self {
        let mut props = SystemProperties::default();
        props.merge(contents);
        props
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn load_file(&mut self, file: &Path) {
        match fs::read_to_string(file) {
            Ok(contents) => {
                trace!("Reading system properties from {:?}", file);
                self.merge(&contents);
            }
            Err(err) => trace!("Skipping property file {:?}: {}", file, err),
        }
    }

    fn merge(&mut self, contents: &str) {
        for line in contents.lines() {
            if let Some(captures) = PROPERTY.captures(line) {
                if let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) {
                    self.values
                        .entry(key.as_str().to_string())
                        .or_insert_with(|| value.as_str().to_string());
                }
            }
        }
    }
}
