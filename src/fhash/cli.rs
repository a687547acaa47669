// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/fhash/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Command line surface of the tool.
///
/// `--list` is mutually exclusive with the positional arguments; the
/// conflict is expressed through the parser grammar, so clap reports
/// both "missing positional" and "--list plus positional" as usage
/// errors before any hashing work starts.
#[derive(Parser, Debug)]
#[command(name = "fhash", version, about = "Hash a file")]
pub struct Cmd {
	/// List the available hash algorithms
	#[arg(long, conflicts_with_all = ["file", "algorithm"])]
	pub list: bool,

	/// The file to hash
	#[arg(value_name = "FILE", required_unless_present = "list")]
	pub file: Option<PathBuf>,

	/// The hash algorithm to use
	#[arg(value_name = "ALGORITHM", required_unless_present = "list")]
	pub algorithm: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::error::ErrorKind;

	#[test]
	fn parses_hash_mode() {
		let cmd =
			Cmd::try_parse_from(["fhash", "data.bin", "sha256"])
				.expect("hash mode should parse");
		assert!(!cmd.list);
		assert_eq!(
			cmd.file.as_deref(),
			Some(std::path::Path::new("data.bin"))
		);
		assert_eq!(cmd.algorithm.as_deref(), Some("sha256"));
	}

	#[test]
	fn parses_list_mode_without_positionals() {
		let cmd = Cmd::try_parse_from(["fhash", "--list"])
			.expect("list mode should parse");
		assert!(cmd.list);
		assert!(cmd.file.is_none());
		assert!(cmd.algorithm.is_none());
	}

	#[test]
	fn rejects_missing_positionals() {
		let err = Cmd::try_parse_from(["fhash"])
			.expect_err("bare invocation must fail");
		assert_eq!(
			err.kind(),
			ErrorKind::MissingRequiredArgument
		);
	}

	#[test]
	fn rejects_list_combined_with_positionals() {
		let err =
			Cmd::try_parse_from(["fhash", "--list", "data.bin"])
				.expect_err("--list with a file must fail");
		assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
	}
}
