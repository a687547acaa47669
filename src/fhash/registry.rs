// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: filehash
// File: src/fhash/registry.rs
//
// Explicit name-to-constructor table for every digest the backend
// offers. Lookup goes through this table only; an unknown name is a
// normal error, never a panic.

use digest::DynDigest;
use skein::consts::U32;

/// Constructor for a fresh accumulator of one algorithm.
pub type HasherFactory = fn() -> Box<dyn DynDigest>;

fn boxed<D>() -> Box<dyn DynDigest>
where
	D: DynDigest + Default + 'static,
{
	Box::<D>::default()
}

/// All supported algorithms, kept in ascending lexicographic order of
/// their CLI names. `--list` prints this table top to bottom.
pub const ALGORITHMS: &[(&str, HasherFactory)] = &[
	("belthash", boxed::<belt_hash::BeltHash>),
	("blake2b", boxed::<blake2::Blake2b512>),
	("blake2s", boxed::<blake2::Blake2s256>),
	("blake3", boxed::<blake3::Hasher>),
	("fsb160", boxed::<fsb::Fsb160>),
	("fsb224", boxed::<fsb::Fsb224>),
	("fsb256", boxed::<fsb::Fsb256>),
	("fsb384", boxed::<fsb::Fsb384>),
	("fsb512", boxed::<fsb::Fsb512>),
	("gost94", boxed::<gost94::Gost94Test>),
	("gost94ua", boxed::<gost94::Gost94UA>),
	("groestl", boxed::<groestl::Groestl256>),
	("jh224", boxed::<jh::Jh224>),
	("jh256", boxed::<jh::Jh256>),
	("jh384", boxed::<jh::Jh384>),
	("jh512", boxed::<jh::Jh512>),
	("md2", boxed::<md2::Md2>),
	("md4", boxed::<md4::Md4>),
	("md5", boxed::<md5::Md5>),
	("ripemd160", boxed::<ripemd::Ripemd160>),
	("ripemd320", boxed::<ripemd::Ripemd320>),
	("sha1", boxed::<sha1::Sha1>),
	("sha224", boxed::<sha2::Sha224>),
	("sha256", boxed::<sha2::Sha256>),
	("sha3-224", boxed::<sha3::Sha3_224>),
	("sha3-256", boxed::<sha3::Sha3_256>),
	("sha3-384", boxed::<sha3::Sha3_384>),
	("sha3-512", boxed::<sha3::Sha3_512>),
	("sha384", boxed::<sha2::Sha384>),
	("sha512", boxed::<sha2::Sha512>),
	("shabal192", boxed::<shabal::Shabal192>),
	("shabal224", boxed::<shabal::Shabal224>),
	("shabal256", boxed::<shabal::Shabal256>),
	("shabal384", boxed::<shabal::Shabal384>),
	("shabal512", boxed::<shabal::Shabal512>),
	("skein1024", boxed::<skein::Skein1024<U32>>),
	("skein256", boxed::<skein::Skein256<U32>>),
	("skein512", boxed::<skein::Skein512<U32>>),
	("sm3", boxed::<sm3::Sm3>),
	("streebog256", boxed::<streebog::Streebog256>),
	("streebog512", boxed::<streebog::Streebog512>),
	("tiger", boxed::<tiger::Tiger>),
	("whirlpool", boxed::<whirlpool::Whirlpool>),
];

/// Resolve an algorithm name to its accumulator constructor.
pub fn lookup(name: &str) -> Option<HasherFactory> {
	ALGORITHMS
		.binary_search_by(|(entry, _)| entry.cmp(&name))
		.ok()
		.map(|idx| ALGORITHMS[idx].1)
}

/// The supported algorithm names, in table (= sorted) order.
pub fn names() -> impl Iterator<Item = &'static str> {
	ALGORITHMS.iter().map(|(name, _)| *name)
}
