// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asset manifest
//!
//! A manifest is plain text with one asset identifier per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Source of manifest text
pub trait ManifestReader {
    /// Read the whole manifest
    fn read_manifest(&self) -> Result<String, ManifestError>;
}

/// Manifest stored on disk
#[derive(Debug, Clone)]
pub struct FileManifest {
    path: PathBuf,
}

impl FileManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestReader for FileManifest {
    fn read_manifest(&self) -> Result<String, ManifestError> {
        fs::read_to_string(&self.path).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Manifest compiled into the binary (e.g. via `include_str!`)
#[derive(Debug, Clone, Copy)]
pub struct BundledManifest(pub &'static str);

impl ManifestReader for BundledManifest {
    fn read_manifest(&self) -> Result<String, ManifestError> {
        Ok(self.0.to_string())
    }
}

/// Split manifest text into identifiers, dropping blank lines
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Errors that can occur reading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// File could not be read
    #[error("cannot read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
