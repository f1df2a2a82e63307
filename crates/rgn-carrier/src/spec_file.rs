// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use lazy_static::lazy_static;
use log::{trace, warn};
use regex::Regex;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

lazy_static! {
    static ref RECORD: Regex =
        Regex::new(r"^[^=]*=\s*(\S+)").expect("error parsing record regex for spec file");
}

#[derive(Debug, Error)]
pub enum SpecFileError {
    #[error("spec file {0:?} does not exist")]
    NotFound(PathBuf),
    #[error("failed to read spec file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed spec file {path:?} at line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Contents of the carrier spec file.
///
/// The file is a list of `key=value` records, the keys are informational only:
///
/// ```text
/// packStorage=/system/vendor/speccfg
/// packCount=2
/// strSpec1=carrierA
/// strSpec2=carrierB
/// ```
///
/// The first record is the directory holding the packages, the second the number of packages,
/// followed by one record per package. Blank lines and `#` comments are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpecFile {
    /// None when the file has no records at all.
    pub storage_location: Option<PathBuf>,
    pub declared_count: usize,
    /// Package identifiers in file order.
    pub packages: Vec<String>,
}

impl SpecFile {
    pub fn from_path(path: &Path) -> Result<SpecFile, SpecFileError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SpecFileError::NotFound(path.to_path_buf())
            } else {
                SpecFileError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        trace!("Parsing spec file {:?}", path);
        SpecFile::parse(path, &contents)
    }

    pub fn parse(path: &Path, contents: &str) -> Result<SpecFile, SpecFileError> {
        let mut storage_location: Option<(usize, PathBuf)> = None;
        let mut declared_count: Option<usize> = None;
        let mut packages: Vec<String> = vec![];

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            let record = line.trim();
            if record.is_empty() || record.starts_with('#') {
                continue;
            }
            let value = parse_record(record);

            if storage_location.is_none() {
                let value = value.ok_or_else(|| SpecFileError::Malformed {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: format!("expected storage location record, found {:?}", record),
                })?;
                storage_location = Some((line_number, PathBuf::from(value)));
                continue;
            }

            let count = match declared_count {
                Some(count) => count,
                None => {
                    let value = value.ok_or_else(|| SpecFileError::Malformed {
                        path: path.to_path_buf(),
                        line: line_number,
                        reason: format!("expected package count record, found {:?}", record),
                    })?;
                    let count =
                        value
                            .parse::<usize>()
                            .map_err(|_| SpecFileError::Malformed {
                                path: path.to_path_buf(),
                                line: line_number,
                                reason: format!("invalid package count {:?}", value),
                            })?;
                    declared_count = Some(count);
                    continue;
                }
            };

            match value {
                Some(package) if !is_package_identifier(&package) => warn!(
                    "Skipping package {:?} at line {}, not a directory name",
                    package, line_number
                ),
                Some(package) if packages.len() < count => packages.push(package),
                Some(package) => warn!(
                    "Ignoring package {:?} at line {}, spec file declares {} package(s)",
                    package, line_number, count
                ),
                None => warn!(
                    "Skipping malformed package record at line {}: {:?}",
                    line_number, record
                ),
            }
        }

        match (storage_location, declared_count) {
            (None, _) => Ok(SpecFile::default()),
            (Some((line, _)), None) => Err(SpecFileError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: "missing package count record".to_string(),
            }),
            (Some((_, storage_location)), Some(declared_count)) => {
                if packages.len() < declared_count {
                    warn!(
                        "Spec file declares {} package(s) but lists {}",
                        declared_count,
                        packages.len()
                    );
                }
                Ok(SpecFile {
                    storage_location: Some(storage_location),
                    declared_count,
                    packages,
                })
            }
        }
    }
}

/// Packages are directories directly under the storage location.
fn is_package_identifier(package: &str) -> bool {
    package != "." && package != ".." && !package.contains(['/', '\\'])
}

/// Value of a `key=value` record, the first whitespace delimited token after the `=`.
fn parse_record(record: &str) -> Option<String> {
    RECORD
        .captures(record)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string())
}
