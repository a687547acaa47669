// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/fhash/app.rs

use crate::fhash::cli::Cmd;
use crate::fhash::error::DigestError;
use crate::fhash::hash::FileHasher;
use crate::fhash::registry;
use clap::Parser;

pub fn run() -> Result<(), DigestError> {
	let cmd = Cmd::parse();

	if cmd.list {
		for name in registry::names() {
			println!("{}", name);
		}
		return Ok(());
	}

	// clap enforces both positionals whenever --list is absent.
	let (file, algorithm) = match (cmd.file, cmd.algorithm) {
		(Some(file), Some(algorithm)) => (file, algorithm),
		_ => unreachable!("positional arguments required by parser"),
	};

	let mut hasher = FileHasher::new(&algorithm)?;
	let digest = hasher.process_file(&file)?;
	println!("{}", digest);
	Ok(())
}
