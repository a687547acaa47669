// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/bin/main.rs

use std::process;

fn main() {
	if let Err(err) = filehash::fhash::app::run() {
		eprintln!("error: {}", err);
		process::exit(1);
	}
}
