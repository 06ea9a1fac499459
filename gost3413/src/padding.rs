//! Padding procedures 1, 2 and 3 of GOST R 34.13-2015.

use alloc::vec::Vec;

use crate::Error;

/// Procedure 1: zero-extends `data` to a multiple of `bs`.
///
/// An empty input stays empty; callers that need at least one block of
/// output must handle that case themselves. The procedure is ambiguous (a
/// receiver cannot tell padding octets from trailing plaintext zeros), so it
/// has no inverse.
pub fn pad1(data: &[u8], bs: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    out.resize((data.len() + bs - 1) / bs * bs, 0);
    out
}

/// Procedure 2 (ISO/IEC 7816-4): appends the `0x80` marker, then zero-fills
/// to the next multiple of `bs`.
///
/// At least one octet is always added, so an aligned input grows by a whole
/// block. The inverse is [`unpad2`].
pub fn pad2(data: &[u8], bs: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + bs);
    out.extend_from_slice(data);
    out.push(0x80);
    out.resize((out.len() + bs - 1) / bs * bs, 0);
    out
}

/// Procedure 3: returns `data` unchanged when it is already a multiple of
/// `bs`, otherwise applies [`pad2`].
pub fn pad3(data: &[u8], bs: usize) -> Vec<u8> {
    if data.len() % bs == 0 {
        data.to_vec()
    } else {
        pad2(data, bs)
    }
}

/// Strips procedure-2 padding.
///
/// The last block is scanned right to left for the `0x80` marker; the buffer
/// is rejected when the marker is absent or followed by a non-zero octet.
pub fn unpad2(data: &[u8], bs: usize) -> Result<Vec<u8>, Error> {
    if data.len() < bs || data.len() % bs != 0 {
        return Err(Error::Padding);
    }
    let last = &data[data.len() - bs..];
    let pos = last
        .iter()
        .rposition(|&b| b == 0x80)
        .ok_or(Error::Padding)?;
    if last[pos + 1..].iter().any(|&b| b != 0) {
        return Err(Error::Padding);
    }
    Ok(data[..data.len() - (bs - pos)].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad1_zero_extends() {
        assert_eq!(pad1(&[0x11, 0x22], 8), [0x11, 0x22, 0, 0, 0, 0, 0, 0]);
        assert_eq!(pad1(&[0x11; 8], 8), [0x11; 8]);
        assert!(pad1(&[], 8).is_empty());
    }

    #[test]
    fn pad2_always_adds_marker() {
        assert_eq!(
            pad2(&[0x11, 0x22], 8),
            [0x11, 0x22, 0x80, 0, 0, 0, 0, 0],
        );
        let padded = pad2(&[0x11; 8], 8);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[8..], [0x80, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn pad3_fixes_aligned_input_only() {
        assert_eq!(pad3(&[0x11; 8], 8), [0x11; 8]);
        assert_eq!(pad3(&[0x11; 16], 8), [0x11; 16]);
        assert_eq!(
            pad3(&[0x11, 0x22], 8),
            [0x11, 0x22, 0x80, 0, 0, 0, 0, 0],
        );
    }

    #[test]
    fn unpad2_inverts_pad2() {
        let unpadded = unpad2(&[0x11, 0x22, 0x80, 0, 0, 0, 0, 0], 8).unwrap();
        assert_eq!(unpadded, [0x11, 0x22]);
        for msg in [&b""[..], b"\x80", b"\x00", b"0123456789"] {
            assert_eq!(unpad2(&pad2(msg, 8), 8).unwrap(), msg);
            assert_eq!(unpad2(&pad2(msg, 16), 16).unwrap(), msg);
        }
    }

    #[test]
    fn unpad2_rejects_malformed_buffers() {
        // no marker anywhere in the last block
        assert_eq!(unpad2(&[0u8; 8], 8), Err(Error::Padding));
        // garbage after the marker
        assert_eq!(
            unpad2(&[0x11, 0x22, 0x80, 0, 0, 1, 0, 0], 8),
            Err(Error::Padding),
        );
        // shorter than one block
        assert_eq!(unpad2(&[0x80], 8), Err(Error::Padding));
    }
}
