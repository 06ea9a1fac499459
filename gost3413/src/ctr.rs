//! [Counter][1] (CTR) mode with the half-block IV of GOST R 34.13-2015,
//! plus its ACPKM re-keyed variant.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CTR

use alloc::vec::Vec;

use cipher::{consts::U32, Block, BlockEncrypt, KeyInit, KeySizeUser, Unsigned};

use crate::utils::fill_be;
use crate::Error;

fn check_args(bs: usize, iv: &[u8], data: &[u8]) -> Result<(), Error> {
    crate::check_block_size(bs)?;
    if iv.len() != bs / 2 {
        return Err(Error::IvSize);
    }
    // the counter occupies half a block, so the keystream is bounded
    if data.len() as u128 > (bs as u128) << (bs * 4) {
        return Err(Error::DataSize);
    }
    Ok(())
}

/// Applies the CTR keystream to `data`.
///
/// Keystream block `i` is the encryption of `iv ‖ i`, with the counter a
/// big-endian half-block. The transform is its own inverse; arbitrary input
/// lengths are accepted.
pub fn ctr<C: BlockEncrypt>(cipher: &C, iv: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv, data)?;
    let mut counter = Block::<C>::default();
    counter[..bs / 2].copy_from_slice(iv);
    let mut keystream = Block::<C>::default();
    let mut out = Vec::with_capacity(data.len());
    for (i, chunk) in data.chunks(bs).enumerate() {
        fill_be(&mut counter[bs / 2..], i as u128);
        cipher.encrypt_block_b2b(&counter, &mut keystream);
        out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
    }
    Ok(out)
}

/// Applies the CTR keystream to `data`, re-deriving the cipher key with
/// ACPKM after every section of `section_size` octets.
///
/// The first section runs under the cipher as given; each following section
/// runs under a fresh instance built from ACPKM-derived key material. The
/// counter sequence is unaffected by the key changes.
pub fn ctr_acpkm<C>(
    mut cipher: C,
    iv: &[u8],
    section_size: usize,
    data: &[u8],
) -> Result<Vec<u8>, Error>
where
    C: BlockEncrypt + KeyInit + KeySizeUser<KeySize = U32>,
{
    let bs = C::BlockSize::USIZE;
    check_args(bs, iv, data)?;
    if section_size == 0 || section_size % bs != 0 {
        return Err(Error::SectionSize);
    }
    let section_blocks = section_size / bs;
    let mut counter = Block::<C>::default();
    counter[..bs / 2].copy_from_slice(iv);
    let mut keystream = Block::<C>::default();
    let mut out = Vec::with_capacity(data.len());
    for (i, chunk) in data.chunks(bs).enumerate() {
        if i != 0 && i % section_blocks == 0 {
            cipher = C::new(&crate::acpkm(&cipher)?);
        }
        fill_be(&mut counter[bs / 2..], i as u128);
        cipher.encrypt_block_b2b(&counter, &mut keystream);
        out.extend(chunk.iter().zip(&keystream).map(|(d, k)| d ^ k));
    }
    Ok(out)
}
