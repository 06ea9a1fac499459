//! Block cipher modes of operation from GOST R 34.13-2015.
//!
//! The crate is cipher-agnostic: every mode is generic over the block cipher
//! traits from the re-exported [`cipher`](https://docs.rs/cipher) crate and
//! works with any 64- or 128-bit block cipher, notably [Magma] and
//! [Kuznyechik] from GOST R 34.12-2015. Alongside the classical modes it
//! implements the three padding procedures of the standard and the ACPKM
//! key-material prolongation of R 1323565.1.017-2018 (CTR-ACPKM and
//! OMAC-ACPKM).
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! The unauthenticated modes in this crate do not ensure ciphertexts are
//! authentic, which can lead to serious vulnerabilities!
//!
//! # Example
//! ```
//! use gost3413::ctr;
//! use kuznyechik::Kuznyechik;
//! use kuznyechik::cipher::KeyInit;
//! use hex_literal::hex;
//!
//! // Example vectors from GOST R 34.13-2015, appendix A.2
//! let key = hex!("
//!     8899AABBCCDDEEFF0011223344556677
//!     FEDCBA98765432100123456789ABCDEF
//! ");
//! let cipher = Kuznyechik::new(&key.into());
//!
//! let ciphertext = ctr(
//!     &cipher,
//!     &hex!("1234567890ABCEF0"),
//!     &hex!("1122334455667700FFEEDDCCBBAA9988"),
//! ).unwrap();
//! assert_eq!(ciphertext, hex!("F195D8BEC10ED1DBD57B5FA240BDA1B8"));
//! ```
//!
//! [Magma]: https://docs.rs/magma
//! [Kuznyechik]: https://docs.rs/kuznyechik
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub use cipher;

use core::fmt;

mod acpkm;
mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod mac;
mod ofb;
pub mod padding;
pub mod utils;

pub use crate::acpkm::{acpkm, acpkm_master, KEYSIZE};
pub use crate::cbc::{cbc_decrypt, cbc_encrypt};
pub use crate::cfb::{cfb_decrypt, cfb_encrypt};
pub use crate::ctr::{ctr, ctr_acpkm};
pub use crate::ecb::{ecb_decrypt, ecb_encrypt};
pub use crate::mac::{mac, mac_acpkm_master};
pub use crate::ofb::ofb;

/// Errors reported by the mode functions.
///
/// Every error is fatal to the call that produced it; no partial output is
/// ever returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The cipher block size is neither 8 nor 16 octets.
    BlockSize,
    /// The IV length does not fit the mode: CBC/CFB/OFB take one or more
    /// whole blocks, the CTR family takes exactly half a block.
    IvSize,
    /// The input is empty where forbidden, unaligned where whole blocks are
    /// required, or exceeds the mode's maximum length.
    DataSize,
    /// The ACPKM section size is zero or not a multiple of the block size.
    SectionSize,
    /// The padding structure of the last block is malformed.
    Padding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BlockSize => "block size is not 8 or 16 octets",
            Error::IvSize => "invalid IV length",
            Error::DataSize => "invalid data length",
            Error::SectionSize => "invalid ACPKM section size",
            Error::Padding => "malformed padding",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Every mode of GOST R 34.13-2015 is defined for 64- and 128-bit blocks
/// only.
pub(crate) fn check_block_size(bs: usize) -> Result<(), Error> {
    match bs {
        8 | 16 => Ok(()),
        _ => Err(Error::BlockSize),
    }
}
