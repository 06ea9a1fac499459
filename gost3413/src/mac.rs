//! MAC (OMAC1/CMAC) mode of GOST R 34.13-2015 and the master-keyed
//! OMAC-ACPKM variant of R 1323565.1.017-2018.

use cipher::{consts::U32, Block, BlockEncrypt, Key, KeyInit, KeySizeUser, Unsigned};

use crate::padding::pad3;
use crate::utils::xor_assign;
use crate::{acpkm_master, Error, KEYSIZE};

/// Subkey derivation constant; the low octet of the block-wide Rb value.
fn rb(bs: usize) -> u8 {
    if bs == 16 {
        0x87
    } else {
        0x1B
    }
}

/// One step of the CMAC subkey rule: a left shift by one bit, folding Rb
/// into the low octet when the shifted-out bit was set.
fn shift_subkey(key: &mut [u8], rb: u8) {
    let mut carry = 0;
    for b in key.iter_mut().rev() {
        let next = *b >> 7;
        *b = (*b << 1) | carry;
        carry = next;
    }
    if carry == 1 {
        if let Some(last) = key.last_mut() {
            *last ^= rb;
        }
    }
}

fn subkeys<C: BlockEncrypt>(cipher: &C) -> (Block<C>, Block<C>) {
    let rb = rb(C::BlockSize::USIZE);
    let mut k1 = Block::<C>::default();
    cipher.encrypt_block(&mut k1);
    shift_subkey(&mut k1, rb);
    let mut k2 = k1.clone();
    shift_subkey(&mut k2, rb);
    (k1, k2)
}

/// Offset of the final (partial or full) block.
fn tail_offset(len: usize, bs: usize) -> usize {
    if len % bs == 0 {
        len - bs
    } else {
        len / bs * bs
    }
}

/// Computes the MAC of `data`.
///
/// The full cipher block is returned; callers truncate it to the MAC length
/// their protocol calls for.
pub fn mac<C: BlockEncrypt>(cipher: &C, data: &[u8]) -> Result<Block<C>, Error> {
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    if data.is_empty() {
        return Err(Error::DataSize);
    }
    let (k1, k2) = subkeys(cipher);
    let aligned = data.len() % bs == 0;
    let tail_offset = tail_offset(data.len(), bs);
    let mut chain = Block::<C>::default();
    for chunk in data[..tail_offset].chunks(bs) {
        xor_assign(&mut chain, chunk);
        cipher.encrypt_block(&mut chain);
    }
    xor_assign(&mut chain, &pad3(&data[tail_offset..], bs));
    xor_assign(&mut chain, if aligned { &k1 } else { &k2 });
    cipher.encrypt_block(&mut chain);
    Ok(chain)
}

/// Computes the MAC of `data` with ACPKM key rotation on every section of
/// `section_size` octets.
///
/// All working keys come from master key material pre-derived with section
/// size `key_section_size`: each section consumes a `(key ‖ K₁)` tuple, and
/// a block-aligned message consumes one extra tuple for its final block.
pub fn mac_acpkm_master<C>(
    cipher: C,
    key_section_size: usize,
    section_size: usize,
    data: &[u8],
) -> Result<Block<C>, Error>
where
    C: BlockEncrypt + KeyInit + KeySizeUser<KeySize = U32>,
{
    let bs = C::BlockSize::USIZE;
    crate::check_block_size(bs)?;
    if data.is_empty() {
        return Err(Error::DataSize);
    }
    if section_size == 0 || section_size % bs != 0 {
        return Err(Error::SectionSize);
    }
    let aligned = data.len() % bs == 0;
    let tail_offset = tail_offset(data.len(), bs);
    // one tuple keys the message head, one more per section boundary the
    // chaining loop crosses, and an aligned tail opens a section of its own
    let boundaries = if tail_offset == 0 {
        0
    } else {
        (tail_offset - 1) / section_size
    };
    let sections = 1 + boundaries + usize::from(aligned);
    let keymats = acpkm_master(cipher, key_section_size, (KEYSIZE + bs) * sections)?;
    let mut tuples = keymats.chunks(KEYSIZE + bs);
    let mut take_tuple = || -> Option<(C, Block<C>)> {
        let tuple = tuples.next()?;
        Some((
            C::new(Key::<C>::from_slice(&tuple[..KEYSIZE])),
            Block::<C>::clone_from_slice(&tuple[KEYSIZE..]),
        ))
    };
    let (mut section_cipher, mut k1) = take_tuple().ok_or(Error::DataSize)?;
    let mut chain = Block::<C>::default();
    let mut offset = 0;
    while offset < tail_offset {
        if offset != 0 && offset % section_size == 0 {
            (section_cipher, k1) = take_tuple().ok_or(Error::DataSize)?;
        }
        xor_assign(&mut chain, &data[offset..offset + bs]);
        section_cipher.encrypt_block(&mut chain);
        offset += bs;
    }
    if aligned {
        (section_cipher, k1) = take_tuple().ok_or(Error::DataSize)?;
    }
    let mut k2 = k1.clone();
    shift_subkey(&mut k2, rb(bs));
    xor_assign(&mut chain, &pad3(&data[tail_offset..], bs));
    xor_assign(&mut chain, if aligned { &k1 } else { &k2 });
    section_cipher.encrypt_block(&mut chain);
    Ok(chain)
}
