//! [Cipher block chaining][1] (CBC) mode with the multi-block feedback
//! register of GOST R 34.13-2015.
//!
//! The IV is a register of one or more whole blocks, used as a FIFO: the
//! oldest block takes part in the chaining and every fresh ciphertext block
//! is pushed onto the tail.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CBC

use alloc::vec::Vec;

use cipher::{Block, BlockDecrypt, BlockEncrypt, Unsigned};

use crate::utils::xor_assign;
use crate::Error;

fn check_args(bs: usize, iv: &[u8], data: &[u8]) -> Result<(), Error> {
    crate::check_block_size(bs)?;
    if iv.is_empty() || iv.len() % bs != 0 {
        return Err(Error::IvSize);
    }
    if data.is_empty() || data.len() % bs != 0 {
        return Err(Error::DataSize);
    }
    Ok(())
}

/// Encrypts `data` in CBC mode under the given register.
pub fn cbc_encrypt<C: BlockEncrypt>(
    cipher: &C,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv, data)?;
    let mut register = iv.to_vec();
    let mut out = Vec::with_capacity(data.len());
    let mut block = Block::<C>::default();
    for chunk in data.chunks(bs) {
        block.copy_from_slice(chunk);
        xor_assign(&mut block, &register[..bs]);
        cipher.encrypt_block(&mut block);
        out.extend_from_slice(&block);
        register[..bs].copy_from_slice(&block);
        register.rotate_left(bs);
    }
    Ok(out)
}

/// Decrypts `data` in CBC mode under the given register.
pub fn cbc_decrypt<C: BlockDecrypt>(
    cipher: &C,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv, data)?;
    let mut register = iv.to_vec();
    let mut out = Vec::with_capacity(data.len());
    let mut block = Block::<C>::default();
    for chunk in data.chunks(bs) {
        block.copy_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_assign(&mut block, &register[..bs]);
        out.extend_from_slice(&block);
        register[..bs].copy_from_slice(chunk);
        register.rotate_left(bs);
    }
    Ok(out)
}
