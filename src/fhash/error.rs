// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/fhash/error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type emitted by the digest pipeline.
///
/// Every variant is terminal for the invocation: the binary prints the
/// message to stderr and exits non-zero, nothing is retried.
#[derive(Debug)]
pub enum DigestError {
	/// The requested algorithm name is not in the registry.
	UnknownAlgorithm(String),
	/// The input file could not be opened or read.
	FileUnreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DigestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownAlgorithm(name) => write!(
				f,
				"unknown algorithm '{}' (use --list to see the supported names)",
				name
			),
			Self::FileUnreadable { path, source } => write!(
				f,
				"cannot read '{}': {}",
				path.display(),
				source
			),
		}
	}
}

impl std::error::Error for DigestError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::UnknownAlgorithm(_) => None,
			Self::FileUnreadable { source, .. } => Some(source),
		}
	}
}
