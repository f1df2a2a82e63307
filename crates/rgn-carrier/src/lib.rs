// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod regionalization;
pub mod spec_file;

pub use regionalization::Regionalization;
pub use spec_file::{SpecFile, SpecFileError};
