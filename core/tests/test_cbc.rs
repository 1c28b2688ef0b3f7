#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use salted_core::crypto::{
        ciphertext_len, decrypt_cbc, derive_key_material, encrypt_cbc, parse_salt_hex, CryptoError,
        KeyMaterial, BLOCK_LEN,
    };

    fn vector_material() -> KeyMaterial {
        derive_key_material(b"somepassword", &parse_salt_hex("8302F586FAB491EC").unwrap())
    }

    fn test_material() -> KeyMaterial {
        KeyMaterial::from_parts([0x11; 32], [0x22; 16])
    }

    // Reference ciphertexts from `openssl enc -aes-256-cbc -S 8302F586FAB491EC -pbkdf2 -iter 10000`.
    #[test]
    fn empty_plaintext_matches_openssl() {
        let km = vector_material();
        let ct = encrypt_cbc(b"", km.key(), km.iv());
        assert_eq!(hex::encode(&ct), "0b743225b651d8a8a810e46af3c36792");
    }

    #[test]
    fn short_plaintext_matches_openssl() {
        let km = vector_material();
        let ct = encrypt_cbc(b"hey", km.key(), km.iv());
        assert_eq!(hex::encode(&ct), "b9276e30f2e94ef2ec97387bb459fe80");
    }

    #[test]
    fn block_aligned_plaintext_gets_full_padding_block() {
        let km = vector_material();
        let ct = encrypt_cbc(b"0123456789abcdef", km.key(), km.iv());
        assert_eq!(ct.len(), 2 * BLOCK_LEN);
        assert_eq!(
            hex::encode(&ct),
            "ac310f2d9f257b6d0a31eb047179861e1c44d90030c964a5f5ea58d0fd0e09e0"
        );
    }

    #[test]
    fn output_length_rounds_up() {
        let km = test_material();
        for len in [0usize, 1, 15, 16, 17, 31, 32, 100] {
            let ct = encrypt_cbc(&vec![0x5A; len], km.key(), km.iv());
            assert_eq!(ct.len(), ciphertext_len(len), "len={}", len);
            assert_eq!(ct.len() % BLOCK_LEN, 0);
            assert!(ct.len() > len);
        }
    }

    #[test]
    fn empty_ciphertext_is_decryption_error() {
        let km = test_material();
        let err = decrypt_cbc(&[], km.key(), km.iv()).unwrap_err();
        assert_eq!(err, CryptoError::InvalidCiphertextLen { len: 0, block: BLOCK_LEN });
    }

    #[test]
    fn unaligned_ciphertext_is_decryption_error() {
        let km = test_material();
        let err = decrypt_cbc(&[0u8; 17], km.key(), km.iv()).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidCiphertextLen { len: 17, .. }));
    }

    #[test]
    fn corrupted_last_block_is_padding_error() {
        let km = test_material();
        let mut ct = encrypt_cbc(b"attack at dawn, bring snacks", km.key(), km.iv());
        // Flipping the previous block's last byte flips the final padding byte.
        let idx = ct.len() - BLOCK_LEN - 1;
        ct[idx] ^= 0x80;
        let err = decrypt_cbc(&ct, km.key(), km.iv()).unwrap_err();
        assert_eq!(err, CryptoError::Padding);
    }

    #[test]
    fn zero_padding_byte_is_padding_error() {
        let km = test_material();
        let mut ct = encrypt_cbc(b"0123456789abcdef", km.key(), km.iv());
        // Final plaintext block is sixteen 0x10 bytes; turn the last one into 0x00.
        let idx = ct.len() - BLOCK_LEN - 1;
        ct[idx] ^= 0x10;
        let err = decrypt_cbc(&ct, km.key(), km.iv()).unwrap_err();
        assert_eq!(err, CryptoError::Padding);
    }

    #[test]
    fn unequal_padding_bytes_is_padding_error() {
        let km = test_material();
        let mut ct = encrypt_cbc(b"0123456789abcdef", km.key(), km.iv());
        // Final byte stays 0x10; one interior padding byte becomes 0x11.
        let idx = ct.len() - BLOCK_LEN - 5;
        ct[idx] ^= 0x01;
        let err = decrypt_cbc(&ct, km.key(), km.iv()).unwrap_err();
        assert_eq!(err, CryptoError::Padding);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_roundtrip(plaintext in proptest::collection::vec(any::<u8>(), 0..512), key in any::<[u8; 32]>(), iv in any::<[u8; 16]>()) {
            let ct = encrypt_cbc(&plaintext, &key, &iv);
            prop_assert_eq!(ct.len(), ciphertext_len(plaintext.len()));
            let pt = decrypt_cbc(&ct, &key, &iv).unwrap();
            prop_assert_eq!(pt, plaintext);
        }
    }
}
