//! MGM test vector from R 1323565.1.026-2019 (128-bit block).

use hex_literal::hex;
use kuznyechik::cipher::KeyInit;
use kuznyechik::Kuznyechik;
use mgm::{Error, Mgm};

const KEY: [u8; 32] = hex!("
    8899AABBCCDDEEFF0011223344556677
    FEDCBA98765432100123456789ABCDEF
");

const NONCE: [u8; 16] = hex!("1122334455667700FFEEDDCCBBAA9988");

const AD: [u8; 41] = hex!("
    02020202020202020101010101010101
    04040404040404040303030303030303
    EA0505050505050505
");

const PLAINTEXT: [u8; 67] = hex!("
    1122334455667700FFEEDDCCBBAA9988
    00112233445566778899AABBCCEEFF0A
    112233445566778899AABBCCEEFF0A00
    2233445566778899AABBCCEEFF0A0011
    AABBCC
");

const CIPHERTEXT: [u8; 67] = hex!("
    A9757B8147956E9055B8A33DE89F42FC
    8075D2212BF9FD5BD3F7069AADC16B39
    497AB15915A6BA85936B5D0EA9F6851C
    C60C14D4D3F883D0AB94420695C76DEB
    2C7552
");

const TAG: [u8; 16] = hex!("CF5D656F40C34F5C46E8BB0E29FCDB4C");

fn aead() -> Mgm<Kuznyechik> {
    Mgm::new(Kuznyechik::new(&KEY.into())).unwrap()
}

#[test]
fn reference_vector() {
    let sealed = aead().seal(&NONCE.into(), &PLAINTEXT, &AD).unwrap();
    assert_eq!(sealed[..67], CIPHERTEXT);
    assert_eq!(sealed[67..], TAG);
    let opened = aead().open(&NONCE.into(), &sealed, &AD).unwrap();
    assert_eq!(opened, PLAINTEXT);
}

#[test]
fn any_bit_flip_fails_authentication() {
    let sealed = aead().seal(&NONCE.into(), &PLAINTEXT, &AD).unwrap();
    for byte in [0, 30, 66, 67, sealed.len() - 1] {
        let mut tampered = sealed.clone();
        tampered[byte] ^= 0x01;
        assert_eq!(
            aead().open(&NONCE.into(), &tampered, &AD),
            Err(Error::Authentication),
        );
    }
    let mut bad_ad = AD;
    bad_ad[17] ^= 0x80;
    assert_eq!(
        aead().open(&NONCE.into(), &sealed, &bad_ad),
        Err(Error::Authentication),
    );
}

#[test]
fn associated_data_only() {
    let sealed = aead().seal(&NONCE.into(), &[], &AD).unwrap();
    assert_eq!(sealed.len(), 16);
    assert!(aead().open(&NONCE.into(), &sealed, &AD).unwrap().is_empty());

    let mut tampered = sealed.clone();
    tampered[3] ^= 0x04;
    assert_eq!(
        aead().open(&NONCE.into(), &tampered, &AD),
        Err(Error::Authentication),
    );
    let mut bad_ad = AD;
    bad_ad[40] ^= 0x01;
    assert_eq!(
        aead().open(&NONCE.into(), &sealed, &bad_ad),
        Err(Error::Authentication),
    );
}

#[test]
fn truncated_tag_is_a_prefix_of_the_full_tag() {
    let full = aead().seal(&NONCE.into(), &PLAINTEXT, &AD).unwrap();
    let short = Mgm::with_tag_size(Kuznyechik::new(&KEY.into()), 4)
        .unwrap()
        .seal(&NONCE.into(), &PLAINTEXT, &AD)
        .unwrap();
    assert_eq!(short[..67], full[..67]);
    assert_eq!(short[67..], full[67..71]);
}

#[test]
fn size_preconditions() {
    assert_eq!(
        aead().seal(&NONCE.into(), &[], &[]),
        Err(Error::DataSize),
    );
    // opening anything shorter than the tag cannot even be split
    assert_eq!(
        aead().open(&NONCE.into(), &TAG[..15], &AD),
        Err(Error::DataSize),
    );
}

#[test]
fn tag_size_bounds() {
    assert_eq!(
        Mgm::with_tag_size(Kuznyechik::new(&KEY.into()), 3).unwrap_err(),
        Error::TagSize,
    );
    assert_eq!(
        Mgm::with_tag_size(Kuznyechik::new(&KEY.into()), 17).unwrap_err(),
        Error::TagSize,
    );
}
