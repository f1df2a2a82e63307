// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    Animation,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaState {
    Boot,
    Shutdown,
}

impl TryFrom<i32> for MediaType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MediaType::Animation),
            1 => Ok(MediaType::Audio),
            _ => Err(value),
        }
    }
}

impl TryFrom<i32> for MediaState {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MediaState::Boot),
            1 => Ok(MediaState::Shutdown),
            _ => Err(value),
        }
    }
}

/// A boot or shutdown media file shipped by a carrier package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub media_type: MediaType,
    pub state: MediaState,
}

impl MediaFile {
    pub const ALL: [MediaFile; 4] = [
        MediaFile::new(MediaType::Animation, MediaState::Boot),
        MediaFile::new(MediaType::Animation, MediaState::Shutdown),
        MediaFile::new(MediaType::Audio, MediaState::Boot),
        MediaFile::new(MediaType::Audio, MediaState::Shutdown),
    ];

    pub const fn new(media_type: MediaType, state: MediaState) -> Self {
        MediaFile { media_type, state }
    }

    /// Parses the integer codes used by callers (`type`: 0 animation, 1 audio; `state`: 0 boot, 1 shutdown).
    pub fn from_codes(media_type: i32, state: i32) -> Option<Self> {
        let media_type = MediaType::try_from(media_type).ok()?;
        let state = MediaState::try_from(state).ok()?;
        Some(MediaFile::new(media_type, state))
    }

    /// Location of the file relative to the root of a carrier package.
    pub fn relative_path(&self) -> &'static str {
        match (self.media_type, self.state) {
            (MediaType::Animation, MediaState::Boot) => "system/media/bootanimation.zip",
            (MediaType::Animation, MediaState::Shutdown) => "system/media/shutdownanimation.zip",
            (MediaType::Audio, MediaState::Boot) => "system/media/boot.wav",
            (MediaType::Audio, MediaState::Shutdown) => "system/media/shutdown.wav",
        }
    }
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} ({:?})", self.media_type, self.state)
    }
}
