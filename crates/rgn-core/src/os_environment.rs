// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use log::trace;
use rgn_fs::path::change_root_of_path;

use crate::{
    system_properties::{SystemProperties, DEFAULT_PROPERTY_FILES},
    Configuration,
};

pub trait Environment: Send + Sync {
    /// Directory that device paths are resolved under.
    /// None on a device, set in tests or when inspecting an extracted image.
    fn get_root(&self) -> Option<PathBuf>;
    fn get_property(&self, key: &str) -> Option<String>;
}

pub struct EnvironmentApi {
    root: Option<PathBuf>,
    property_files: Vec<PathBuf>,
    properties: Arc<Mutex<Option<SystemProperties>>>,
}
impl EnvironmentApi {
    pub fn new() -> Self {
        EnvironmentApi {
            root: None,
            property_files: DEFAULT_PROPERTY_FILES.iter().map(PathBuf::from).collect(),
            properties: Arc::new(Mutex::new(None)),
        }
    }
    pub fn from_config(config: &Configuration, root: Option<PathBuf>) -> Self {
        let mut env = EnvironmentApi::new();
        env.root = root;
        if let Some(files) = &config.property_files {
            env.property_files = files.clone();
        }
        env
    }
}
impl Default for EnvironmentApi {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for EnvironmentApi {
    fn get_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
    fn get_property(&self, key: &str) -> Option<String> {
        let mut properties = self.properties.lock().unwrap();
        if properties.is_none() {
            let files = self
                .property_files
                .iter()
                .map(|p| change_root_of_path(p, &self.root))
                .collect::<Vec<PathBuf>>();
            let props = SystemProperties::from_files(&files);
            trace!("Loaded {} system properties from {:?}", props.len(), files);
            *properties = Some(props);
        }
        properties
            .as_ref()
            .and_then(|props| props.get(key))
            .map(|v| v.to_string())
    }
}
