//! Multilinear Galois Mode (MGM) authenticated encryption with associated
//! data, as defined in R 1323565.1.026-2019.
//!
//! MGM is cipher-agnostic: it is generic over the block cipher traits of the
//! re-exported [`cipher`](https://docs.rs/cipher) crate and accepts any 64-
//! or 128-bit block cipher, notably Magma and Kuznyechik from
//! GOST R 34.12-2015. Encryption and authentication run on two counters
//! derived from a single per-message nonce: the encryption counter advances
//! in its low half, the authentication counter in its high half, and the
//! authenticator is a polynomial sum in GF(2^n).
//!
//! # Example
//! ```
//! use mgm::Mgm;
//! use kuznyechik::Kuznyechik;
//! use kuznyechik::cipher::KeyInit;
//! use hex_literal::hex;
//!
//! let key = hex!("
//!     8899AABBCCDDEEFF0011223344556677
//!     FEDCBA98765432100123456789ABCDEF
//! ");
//! let aead = Mgm::new(Kuznyechik::new(&key.into())).unwrap();
//!
//! let nonce = hex!("11223344556677 00FFEEDDCCBBAA9988");
//! let sealed = aead
//!     .seal(&nonce.into(), b"pay load", b"header")
//!     .unwrap();
//! let opened = aead.open(&nonce.into(), &sealed, b"header").unwrap();
//! assert_eq!(opened, b"pay load");
//! ```
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub use cipher;

use alloc::vec::Vec;
use cipher::{Block, BlockEncrypt, Unsigned};
use core::fmt;
use subtle::ConstantTimeEq;

mod gf;

/// MGM failure conditions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The cipher block size is neither 8 nor 16 octets.
    BlockSize,
    /// The requested tag size is outside `4..=block_size`.
    TagSize,
    /// Plaintext and associated data are both empty, their combined length
    /// exceeds the mode's maximum, or the sealed input is shorter than the
    /// tag.
    DataSize,
    /// The tag does not authenticate the received message.
    Authentication,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BlockSize => "block size is not 8 or 16 octets",
            Error::TagSize => "invalid tag size",
            Error::DataSize => "invalid data length",
            Error::Authentication => "authentication failure",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Clears the high bit of the leading octet.
///
/// The encryption and authentication counters live in disjoint halves of the
/// nonce space, told apart by that bit; a caller canonicalises a randomly
/// generated nonce with this helper. [`Mgm::seal`] itself accepts the nonce
/// as given.
pub fn nonce_prepare(nonce: &mut [u8]) {
    if let Some(b) = nonce.first_mut() {
        *b &= 0x7F;
    }
}

/// MGM instance: a block cipher plus a tag size.
///
/// The instance is immutable once constructed and may be reused for any
/// number of messages, each under its own unique nonce.
#[derive(Clone, Debug)]
pub struct Mgm<C: BlockEncrypt> {
    cipher: C,
    tag_size: usize,
    max_size: u128,
    r: u128,
}

impl<C: BlockEncrypt> Mgm<C> {
    /// Creates an instance whose tag is a whole cipher block.
    pub fn new(cipher: C) -> Result<Self, Error> {
        Self::with_tag_size(cipher, C::BlockSize::USIZE)
    }

    /// Creates an instance with a truncated tag of `tag_size` octets,
    /// `4 ≤ tag_size ≤ block size`.
    pub fn with_tag_size(cipher: C, tag_size: usize) -> Result<Self, Error> {
        let bs = C::BlockSize::USIZE;
        let r = match bs {
            8 => gf::R64,
            16 => gf::R128,
            _ => return Err(Error::BlockSize),
        };
        if tag_size < 4 || tag_size > bs {
            return Err(Error::TagSize);
        }
        Ok(Self {
            cipher,
            tag_size,
            max_size: (1 << (bs * 4)) - 1,
            r,
        })
    }

    /// Encrypts `plaintext`, authenticating it together with `ad`.
    ///
    /// Returns `ciphertext ‖ tag`. At least one of `plaintext` and `ad` must
    /// be non-empty.
    pub fn seal(
        &self,
        nonce: &Block<C>,
        plaintext: &[u8],
        ad: &[u8],
    ) -> Result<Vec<u8>, Error> {
        self.check_sizes(plaintext, ad)?;
        let mut out = self.crypt(nonce, plaintext);
        let tag = self.auth(nonce, &out, ad);
        out.extend_from_slice(&tag[..self.tag_size]);
        Ok(out)
    }

    /// Verifies the tag of `data` (= `ciphertext ‖ tag`) against `ad` and,
    /// only on success, decrypts and returns the plaintext.
    ///
    /// The tag comparison is constant time; a mismatch reports
    /// [`Error::Authentication`] and nothing else.
    pub fn open(&self, nonce: &Block<C>, data: &[u8], ad: &[u8]) -> Result<Vec<u8>, Error> {
        if data.len() < self.tag_size {
            return Err(Error::DataSize);
        }
        let (body, tag) = data.split_at(data.len() - self.tag_size);
        self.check_sizes(body, ad)?;
        let expected = self.auth(nonce, body, ad);
        if !bool::from(expected[..self.tag_size].ct_eq(tag)) {
            return Err(Error::Authentication);
        }
        Ok(self.crypt(nonce, body))
    }

    fn check_sizes(&self, payload: &[u8], ad: &[u8]) -> Result<(), Error> {
        if payload.is_empty() && ad.is_empty() {
            return Err(Error::DataSize);
        }
        if payload.len() as u128 + ad.len() as u128 > self.max_size {
            return Err(Error::DataSize);
        }
        Ok(())
    }

    /// Applies the MGM keystream. Self-inverse.
    ///
    /// The register is seeded with the encryption of the masked nonce and
    /// that encrypted seed is itself the first cipher input; later inputs
    /// come from incrementing the seed's low half.
    fn crypt(&self, nonce: &Block<C>, data: &[u8]) -> Vec<u8> {
        let bs = C::BlockSize::USIZE;
        let mut counter = nonce.clone();
        counter[0] &= 0x7F;
        self.cipher.encrypt_block(&mut counter);
        let mut keystream = Block::<C>::default();
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(bs) {
            self.cipher.encrypt_block_b2b(&counter, &mut keystream);
            out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
            incr_be(&mut counter[bs / 2..]);
        }
        out
    }

    /// Computes the full-block tag over `ad` then `data`.
    fn auth(&self, nonce: &Block<C>, data: &[u8], ad: &[u8]) -> Block<C> {
        let bs = C::BlockSize::USIZE;
        let mut counter = nonce.clone();
        counter[0] |= 0x80;
        self.cipher.encrypt_block(&mut counter);
        let mut sum = Block::<C>::default();
        let mut h = Block::<C>::default();
        for chunk in ad.chunks(bs).chain(data.chunks(bs)) {
            self.cipher.encrypt_block_b2b(&counter, &mut h);
            gf::mul_sum(self.r, &h, chunk, &mut sum);
            incr_be(&mut counter[..bs / 2]);
        }
        // closing block: both stream lengths in bits, half a block each
        let mut len_block = Block::<C>::default();
        fill_be(&mut len_block[..bs / 2], ad.len() as u128 * 8);
        fill_be(&mut len_block[bs / 2..], data.len() as u128 * 8);
        self.cipher.encrypt_block_b2b(&counter, &mut h);
        gf::mul_sum(self.r, &h, &len_block, &mut sum);
        self.cipher.encrypt_block(&mut sum);
        sum
    }
}

/// Branch-free big-endian increment modulo `2^(8 · buf.len())`.
fn incr_be(buf: &mut [u8]) {
    let mut carry = 1u16;
    for b in buf.iter_mut().rev() {
        let v = *b as u16 + carry;
        *b = v as u8;
        carry = v >> 8;
    }
}

/// Writes `v` into `out` as a big-endian integer of exactly `out.len()`
/// octets, truncating the most-significant excess.
fn fill_be(out: &mut [u8], mut v: u128) {
    for b in out.iter_mut().rev() {
        *b = v as u8;
        v >>= 8;
    }
}
