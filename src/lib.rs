// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/lib.rs

pub mod fhash {
	pub mod app;
	pub mod cli;
	pub mod error;
	pub mod hash;
	pub mod registry;
}
