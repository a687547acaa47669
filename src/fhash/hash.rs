// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/fhash/hash.rs

use crate::fhash::error::DigestError;
use crate::fhash::registry;
use digest::DynDigest;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read granularity for file input. Conventional I/O buffer size; the
/// digest is independent of how the input is sliced.
pub const CHUNK_SIZE: usize = 4096;

/// One hash computation in progress.
///
/// Created per invocation, fed chunks in file order, finalized once.
pub struct FileHasher {
	digest: Box<dyn DynDigest>,
}

impl FileHasher {
	pub fn new(algorithm: &str) -> Result<Self, DigestError> {
		let factory = registry::lookup(algorithm).ok_or_else(|| {
			DigestError::UnknownAlgorithm(algorithm.to_string())
		})?;
		Ok(Self { digest: factory() })
	}

	/// Hash a file and return its lowercase hex digest.
	///
	/// The handle is dropped when this returns, on the error path
	/// included.
	pub fn process_file(
		&mut self,
		path: &Path,
	) -> Result<String, DigestError> {
		let file = File::open(path).map_err(|source| {
			DigestError::FileUnreadable {
				path: path.to_path_buf(),
				source,
			}
		})?;
		self.process_reader(file).map_err(|source| {
			DigestError::FileUnreadable {
				path: path.to_path_buf(),
				source,
			}
		})
	}

	/// Feed the reader through the accumulator in fixed-size chunks
	/// until end of stream, then finalize to lowercase hex.
	pub fn process_reader<R: Read>(
		&mut self,
		mut reader: R,
	) -> io::Result<String> {
		let mut buffer = [0u8; CHUNK_SIZE];
		loop {
			let count = reader.read(&mut buffer)?;
			if count == 0 {
				break;
			}
			self.digest.update(&buffer[..count]);
		}
		Ok(hex::encode(self.digest.finalize_reset()))
	}
}
