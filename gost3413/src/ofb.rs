//! [Output feedback][1] (OFB) mode with the multi-block feedback register of
//! GOST R 34.13-2015.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#OFB

use alloc::vec::Vec;

use cipher::{Block, BlockEncrypt, Unsigned};

use crate::Error;

/// Applies the OFB keystream to `data`.
///
/// The transform is its own inverse, so the same call encrypts and decrypts.
/// Arbitrary input lengths are accepted; the last keystream block is
/// truncated to the tail.
pub fn ofb<C: BlockEncrypt>(cipher: &C, iv: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    if iv.is_empty() || iv.len() % bs != 0 {
        return Err(Error::IvSize);
    }
    let mut register = iv.to_vec();
    let mut out = Vec::with_capacity(data.len());
    let mut keystream = Block::<C>::default();
    for chunk in data.chunks(bs) {
        cipher.encrypt_block_b2b(Block::<C>::from_slice(&register[..bs]), &mut keystream);
        out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
        register[..bs].copy_from_slice(&keystream);
        register.rotate_left(bs);
    }
    Ok(out)
}
