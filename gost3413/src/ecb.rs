//! [Electronic codebook][1] (ECB) mode.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#ECB

use alloc::vec::Vec;

use cipher::{Block, BlockDecrypt, BlockEncrypt, Unsigned};

use crate::Error;

/// Encrypts each block of `data` independently.
///
/// The input must be a positive multiple of the block size.
pub fn ecb_encrypt<C: BlockEncrypt>(cipher: &C, data: &[u8]) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    if data.is_empty() || data.len() % bs != 0 {
        return Err(Error::DataSize);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut block = Block::<C>::default();
    for chunk in data.chunks(bs) {
        block.copy_from_slice(chunk);
        cipher.encrypt_block(&mut block);
        out.extend_from_slice(&block);
    }
    Ok(out)
}

/// Decrypts each block of `data` independently.
pub fn ecb_decrypt<C: BlockDecrypt>(cipher: &C, data: &[u8]) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    if data.is_empty() || data.len() % bs != 0 {
        return Err(Error::DataSize);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut block = Block::<C>::default();
    for chunk in data.chunks(bs) {
        block.copy_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        out.extend_from_slice(&block);
    }
    Ok(out)
}
