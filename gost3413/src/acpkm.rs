//! ACPKM key-material prolongation from R 1323565.1.017-2018.
//!
//! ACPKM periodically replaces the working key of a long-running encryption
//! or authentication so that no single key ever processes more than one
//! section of data. The section key is derived from the current cipher alone
//! ([`acpkm`]); master-keyed modes additionally pre-derive whole key tuples
//! from a CTR-ACPKM keystream ([`acpkm_master`]).

use alloc::vec;
use alloc::vec::Vec;

use cipher::{consts::U32, Block, BlockEncrypt, Key, KeyInit, KeySizeUser, Unsigned};

use crate::Error;

/// Key length, in octets, consumed by the cipher constructors of the
/// re-keying modes.
pub const KEYSIZE: usize = 32;

/// Derives the next section key from the cipher keyed with the current one.
///
/// The derivation encrypts a fixed schedule of constant blocks: the j-th
/// block holds the octets `0x80 + bs·j` … `0x80 + bs·j + bs − 1`, and enough
/// blocks are taken to fill [`KEYSIZE`] octets.
pub fn acpkm<C>(cipher: &C) -> Result<Key<C>, Error>
where
    C: BlockEncrypt + KeySizeUser<KeySize = U32>,
{
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    let mut key = Key::<C>::default();
    let mut block = Block::<C>::default();
    for (j, chunk) in key.chunks_mut(bs).enumerate() {
        for (i, b) in block.iter_mut().enumerate() {
            *b = (0x80 + bs * j + i) as u8;
        }
        cipher.encrypt_block(&mut block);
        chunk.copy_from_slice(&block);
    }
    Ok(key)
}

/// Produces `n` octets of master key material.
///
/// The material is the CTR-ACPKM keystream over `n` zero octets with section
/// size `key_section_size` and an all-ones half-block IV. Callers slice it
/// into per-section `(key ‖ K₁)` tuples.
pub fn acpkm_master<C>(cipher: C, key_section_size: usize, n: usize) -> Result<Vec<u8>, Error>
where
    C: BlockEncrypt + KeyInit + KeySizeUser<KeySize = U32>,
{
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    let iv = vec![0xFF; bs / 2];
    crate::ctr_acpkm(cipher, &iv, key_section_size, &vec![0; n])
}
