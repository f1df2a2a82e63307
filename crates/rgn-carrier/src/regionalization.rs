// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::{debug, trace};
use rgn_core::{
    media::MediaFile, os_environment::Environment, Configuration,
    REGIONALIZATION_SUPPORT_PROPERTY, SPEC_FILE,
};
use rgn_fs::path::{change_root_of_path, is_readable, join_device_path};
use std::path::{Path, PathBuf};

use crate::spec_file::{SpecFile, SpecFileError};

/// Overlay directory relative to the root of a carrier package.
const OVERLAY_DIR: &str = "system/vendor/overlay";
/// Suffix of the framework resource overlay a package must ship for its overlay directory to apply.
const FRAMEWORK_RES_OVERLAY_SUFFIX: &str = "FrameworksRes";

/// Carrier packages declared by the spec file, and the media/overlay paths they provide.
///
/// Nothing is loaded on construction, call [`Regionalization::load_packages_from_spec_file`]
/// (or construct with [`Regionalization::load`]) before querying paths.
#[derive(Debug, Clone)]
pub struct Regionalization {
    root: Option<PathBuf>,
    spec_file: PathBuf,
    storage_location: Option<PathBuf>,
    packages: Vec<String>,
    loaded: bool,
}

impl Regionalization {
    /// Whether the build enables switching between regional carrier packages.
    pub fn is_supported(env: &dyn Environment) -> bool {
        env.get_property(REGIONALIZATION_SUPPORT_PROPERTY)
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    pub fn from(env: &dyn Environment) -> Self {
        Regionalization::from_config(env, &Configuration::default())
    }

    pub fn from_config(env: &dyn Environment, config: &Configuration) -> Self {
        let root = env.get_root();
        let spec_file = config
            .spec_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(SPEC_FILE));
        Regionalization {
            spec_file: change_root_of_path(&spec_file, &root),
            root,
            storage_location: None,
            packages: vec![],
            loaded: false,
        }
    }

    /// Constructs and immediately loads the spec file.
    /// A failed load is logged and leaves the instance unloaded.
    pub fn load(env: &dyn Environment) -> Self {
        let mut regionalization = Regionalization::from(env);
        if !regionalization.load_packages_from_spec_file() {
            debug!("Regionalization failed to load packages for carrier");
        }
        regionalization
    }

    /// Reads the spec file, replacing anything loaded previously.
    /// Returns false when the file is missing, unreadable or its header is malformed,
    /// in which case nothing remains loaded.
    pub fn load_packages_from_spec_file(&mut self) -> bool {
        match self.try_load_packages_from_spec_file() {
            Ok(()) => true,
            Err(err) => {
                debug!("Failed to load carrier packages from {:?}: {}", self.spec_file, err);
                false
            }
        }
    }

    pub fn try_load_packages_from_spec_file(&mut self) -> Result<(), SpecFileError> {
        self.unload();
        let spec = SpecFile::from_path(&self.spec_file)?;
        self.storage_location = spec
            .storage_location
            .map(|location| change_root_of_path(&location, &self.root));
        self.packages = spec.packages;
        self.loaded = true;
        trace!(
            "Loaded carrier packages {:?} from {:?}",
            self.packages,
            self.storage_location
        );
        Ok(())
    }

    /// Path of the media file for the given codes, see [`MediaFile::from_codes`].
    pub fn get_media_file(&self, media_type: i32, state: i32) -> Option<PathBuf> {
        match MediaFile::from_codes(media_type, state) {
            Some(media) => self.find_media_file(media),
            None => {
                trace!("Unknown media file type {} state {}", media_type, state);
                None
            }
        }
    }

    /// The media file of the first package, in spec file order, that ships a readable copy.
    pub fn find_media_file(&self, media: MediaFile) -> Option<PathBuf> {
        self.package_dirs().find_map(|(_, package_dir)| {
            let file = join_device_path(&package_dir, media.relative_path());
            if is_readable(&file) {
                trace!("Regionalization media file {} = {:?}", media, file);
                Some(file)
            } else {
                None
            }
        })
    }

    /// The overlay directory of the first package, in spec file order, that ships
    /// a readable `<package>FrameworksRes` overlay.
    pub fn get_overlay_dir(&self) -> Option<PathBuf> {
        self.package_dirs().find_map(|(package, package_dir)| {
            let overlay_dir = join_device_path(&package_dir, OVERLAY_DIR);
            let framework_res =
                overlay_dir.join(format!("{}{}", package, FRAMEWORK_RES_OVERLAY_SUFFIX));
            if is_readable(&framework_res) {
                trace!("Regionalization overlay dir = {:?}", overlay_dir);
                Some(overlay_dir)
            } else {
                None
            }
        })
    }

    pub fn spec_file(&self) -> &Path {
        &self.spec_file
    }

    pub fn storage_location(&self) -> Option<&Path> {
        self.storage_location.as_deref()
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn unload(&mut self) {
        self.storage_location = None;
        self.packages.clear();
        self.loaded = false;
    }

    fn package_dirs(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.storage_location.iter().flat_map(move |storage| {
            self.packages
                .iter()
                .map(move |package| (package.as_str(), join_device_path(storage, package)))
        })
    }
}
