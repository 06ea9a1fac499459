//! [Cipher feedback][1] (CFB) mode with the multi-block feedback register of
//! GOST R 34.13-2015.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CFB

use alloc::vec::Vec;

use cipher::{Block, BlockEncrypt, Unsigned};

use crate::Error;

fn check_args(bs: usize, iv: &[u8]) -> Result<(), Error> {
    crate::check_block_size(bs)?;
    if iv.is_empty() || iv.len() % bs != 0 {
        return Err(Error::IvSize);
    }
    Ok(())
}

/// Encrypts `data` in CFB mode under the given register.
///
/// Arbitrary input lengths are accepted; the last keystream block is
/// truncated to the tail.
pub fn cfb_encrypt<C: BlockEncrypt>(
    cipher: &C,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv)?;
    let mut register = iv.to_vec();
    let mut out = Vec::with_capacity(data.len());
    let mut keystream = Block::<C>::default();
    for chunk in data.chunks(bs) {
        cipher.encrypt_block_b2b(Block::<C>::from_slice(&register[..bs]), &mut keystream);
        out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
        if chunk.len() == bs {
            let start = out.len() - bs;
            register[..bs].copy_from_slice(&out[start..]);
            register.rotate_left(bs);
        }
    }
    Ok(out)
}

/// Decrypts `data` in CFB mode under the given register.
pub fn cfb_decrypt<C: BlockEncrypt>(
    cipher: &C,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv)?;
    let mut register = iv.to_vec();
    let mut out = Vec::with_capacity(data.len());
    let mut keystream = Block::<C>::default();
    for chunk in data.chunks(bs) {
        cipher.encrypt_block_b2b(Block::<C>::from_slice(&register[..bs]), &mut keystream);
        out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
        if chunk.len() == bs {
            register[..bs].copy_from_slice(chunk);
            register.rotate_left(bs);
        }
    }
    Ok(out)
}
