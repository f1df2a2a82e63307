// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

pub mod media;
pub mod os_environment;
pub mod system_properties;

/// Well known location of the carrier spec file on the device.
pub const SPEC_FILE: &str = "/persist/speccfg/spec";

/// System property that enables carrier regionalization on a build.
pub const REGIONALIZATION_SUPPORT_PROPERTY: &str = "ro.regionalization.support";

#[derive(Debug, Default, Clone)]
pub struct Configuration {
    /// Spec file to load instead of the well known [`SPEC_FILE`].
    /// Like the default location, this is re-rooted when the environment has a root.
    pub spec_file: Option<PathBuf>,
    /// Property files to read system properties from, in order of precedence.
    /// Defaults to the property files of a stock Android image.
    pub property_files: Option<Vec<PathBuf>>,
}
