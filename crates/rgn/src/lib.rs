// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use env_logger::Builder;
use log::LevelFilter;
use rgn_carrier::Regionalization;
use rgn_core::{
    media::MediaFile,
    os_environment::{Environment, EnvironmentApi},
    Configuration,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub fn initialize_logger(log_level: LevelFilter) {
    Builder::new().filter(None, log_level).init();
}

pub struct InspectOptions {
    /// Spec file to read instead of the well known location.
    pub spec_file: Option<PathBuf>,
    /// Directory holding an extracted device image, device paths are resolved under it.
    pub root: Option<PathBuf>,
    pub verbose: bool,
}

impl InspectOptions {
    fn configuration(&self) -> Configuration {
        Configuration {
            spec_file: self.spec_file.clone(),
            property_files: None,
        }
    }
    fn environment(&self, config: &Configuration) -> EnvironmentApi {
        EnvironmentApi::from_config(config, self.root.clone())
    }
    fn initialize_logger(&self) {
        initialize_logger(if self.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        });
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaFileInfo {
    pub media: MediaFile,
    pub path: PathBuf,
}

/// Everything the regionalization environment resolves on a device.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarrierInfo {
    pub supported: bool,
    pub spec_file: PathBuf,
    pub loaded: bool,
    pub storage_location: Option<PathBuf>,
    pub packages: Vec<String>,
    pub overlay_dir: Option<PathBuf>,
    pub media_files: Vec<MediaFileInfo>,
}

pub fn collect_info(env: &dyn Environment, config: &Configuration) -> CarrierInfo {
    let mut regionalization = Regionalization::from_config(env, config);
    regionalization.load_packages_from_spec_file();
    CarrierInfo {
        supported: Regionalization::is_supported(env),
        spec_file: regionalization.spec_file().to_path_buf(),
        loaded: regionalization.is_loaded(),
        storage_location: regionalization.storage_location().map(|p| p.to_path_buf()),
        packages: regionalization.packages().to_vec(),
        overlay_dir: regionalization.get_overlay_dir(),
        media_files: MediaFile::ALL
            .iter()
            .filter_map(|media| {
                regionalization
                    .find_media_file(*media)
                    .map(|path| MediaFileInfo {
                        media: *media,
                        path,
                    })
            })
            .collect(),
    }
}

/// Prints whether regionalization is supported, returns the answer.
pub fn report_supported_stdio(options: InspectOptions) -> bool {
    options.initialize_logger();
    let env = options.environment(&options.configuration());
    let supported = Regionalization::is_supported(&env);
    println!("{}", supported);
    supported
}

/// Prints the loaded packages one per line, returns false when the spec file could not be loaded.
pub fn report_packages_stdio(options: InspectOptions) -> bool {
    options.initialize_logger();
    let config = options.configuration();
    let env = options.environment(&config);
    let mut regionalization = Regionalization::from_config(&env, &config);
    if let Err(err) = regionalization.try_load_packages_from_spec_file() {
        eprintln!("{}", err);
        return false;
    }
    for package in regionalization.packages() {
        println!("{}", package);
    }
    true
}

pub fn report_media_file_stdio(options: InspectOptions, media_type: i32, state: i32) -> bool {
    options.initialize_logger();
    let config = options.configuration();
    let env = options.environment(&config);
    let mut regionalization = Regionalization::from_config(&env, &config);
    if let Err(err) = regionalization.try_load_packages_from_spec_file() {
        eprintln!("{}", err);
        return false;
    }
    print_path(regionalization.get_media_file(media_type, state))
}

pub fn report_overlay_dir_stdio(options: InspectOptions) -> bool {
    options.initialize_logger();
    let config = options.configuration();
    let env = options.environment(&config);
    let mut regionalization = Regionalization::from_config(&env, &config);
    if let Err(err) = regionalization.try_load_packages_from_spec_file() {
        eprintln!("{}", err);
        return false;
    }
    print_path(regionalization.get_overlay_dir())
}

pub fn report_info_stdio(options: InspectOptions, json: bool) -> bool {
    options.initialize_logger();
    let config = options.configuration();
    let env = options.environment(&config);
    let info = collect_info(&env, &config);
    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Failed to serialize carrier info: {}", err);
                return false;
            }
        }
    } else {
        print_info(&info);
    }
    info.loaded
}

fn print_info(info: &CarrierInfo) {
    println!("{:<20} : {}", "Supported", info.supported);
    println!("{:<20} : {:?}", "Spec file", info.spec_file);
    println!("{:<20} : {}", "Loaded", info.loaded);
    if let Some(storage_location) = &info.storage_location {
        println!("{:<20} : {:?}", "Storage location", storage_location);
    }
    if !info.packages.is_empty() {
        println!();
        println!("Packages ({}):", info.packages.len());
        println!("--------------");
        for package in &info.packages {
            println!("{}", package);
        }
    }
    if let Some(overlay_dir) = &info.overlay_dir {
        println!();
        println!("{:<20} : {:?}", "Overlay dir", overlay_dir);
    }
    if !info.media_files.is_empty() {
        println!();
        println!("Media files:");
        println!("------------");
        for media_file in &info.media_files {
            println!("{:<20} : {:?}", media_file.media.to_string(), media_file.path);
        }
    }
}

fn print_path(path: Option<PathBuf>) -> bool {
    match path {
        Some(path) => {
            println!("{}", path.display());
            true
        }
        None => false,
    }
}
