//! Property-based tests for proof ids and stake binding
//!
//! Tests for:
//! - Determinism: same builder state gives the same id
//! - Order sensitivity: swapping two stakes changes the id
//! - Key sensitivity: a different master key changes the id
//! - Binding: signatures do not verify under a foreign proof id

use super::{Amount, OutPoint, ProofBuilder, ProofId, TxId};
use crate::crypto::{PrivateKey, PublicKey};
use crate::hash::Hash256;
use proptest::prelude::*;

// Helper to derive a valid key from a seed byte
fn test_key(seed: u8) -> PrivateKey {
    let mut bytes = [0x42u8; 32];
    bytes[0] = seed;
    PrivateKey::from_bytes(bytes)
}

fn test_master(seed: u8) -> PublicKey {
    let mut bytes = [0x17u8; 32];
    bytes[0] = seed;
    PrivateKey::from_bytes(bytes)
        .public_key()
        .expect("nonzero test key is valid")
}

fn add(builder: &mut ProofBuilder, txid: [u8; 32], vout: u32, amount: i64, height: u32, key: u8) {
    let added = builder.add_utxo(
        OutPoint::new(TxId(Hash256(txid)), vout),
        Amount::from_units(amount),
        height,
        height % 2 == 0,
        test_key(key),
    );
    assert!(added);
}

proptest! {
    /// Property test: Determinism
    /// proof_id() is a pure function of builder state
    #[test]
    fn prop_determinism(
        sequence in any::<u64>(),
        expiration in any::<i64>(),
        txid in any::<[u8; 32]>(),
        amount in 0i64..21_000_000_00000000,
        height in 1u32..1_000_000,
    ) {
        let mut builder = ProofBuilder::new(sequence, expiration, test_master(1));
        add(&mut builder, txid, 0, amount, height, 1);

        prop_assert_eq!(builder.proof_id(), builder.proof_id());
    }

    /// Property test: Order sensitivity
    /// Adding the same two distinct stakes in opposite order changes the id
    #[test]
    fn prop_order_sensitivity(
        txid_a in any::<[u8; 32]>(),
        txid_b in any::<[u8; 32]>(),
        amount_a in 0i64..1_000_000,
        amount_b in 0i64..1_000_000,
    ) {
        prop_assume!(txid_a != txid_b);

        let mut forward = ProofBuilder::new(0, 0, test_master(1));
        add(&mut forward, txid_a, 0, amount_a, 10, 1);
        add(&mut forward, txid_b, 0, amount_b, 20, 2);

        let mut reverse = ProofBuilder::new(0, 0, test_master(1));
        add(&mut reverse, txid_b, 0, amount_b, 20, 2);
        add(&mut reverse, txid_a, 0, amount_a, 10, 1);

        prop_assert_ne!(forward.proof_id(), reverse.proof_id());
    }

    /// Property test: Key sensitivity
    /// Builders that differ only in master key produce different ids
    #[test]
    fn prop_master_key_sensitivity(
        master_a in 1u8..=255,
        master_b in 1u8..=255,
        txid in any::<[u8; 32]>(),
    ) {
        prop_assume!(master_a != master_b);

        let mut a = ProofBuilder::new(5, 6, test_master(master_a));
        add(&mut a, txid, 1, 100, 7, 1);
        let mut b = ProofBuilder::new(5, 6, test_master(master_b));
        add(&mut b, txid, 1, 100, 7, 1);

        prop_assert_ne!(a.proof_id(), b.proof_id());
    }

    /// Property test: Signature binding
    /// A signed stake only verifies under the proof id it was signed for
    #[test]
    fn prop_signature_binding(
        txid in any::<[u8; 32]>(),
        key in 1u8..=255,
        other_id in any::<[u8; 32]>(),
    ) {
        let mut builder = ProofBuilder::new(0, 0, test_master(1));
        add(&mut builder, txid, 0, 1000, 10, key);
        let proof_id = builder.proof_id();
        let foreign = ProofId::from(Hash256(other_id));
        prop_assume!(foreign != proof_id);

        let proof = builder.build();
        let signed = &proof.stakes()[0];

        prop_assert!(signed.verify(&proof_id));
        prop_assert!(!signed.verify(&foreign));
    }

    /// Property test: Rejection leaves state untouched
    #[test]
    fn prop_invalid_key_is_noop(
        txid in any::<[u8; 32]>(),
        amount in 0i64..1_000_000,
    ) {
        let mut builder = ProofBuilder::new(0, 0, test_master(1));
        add(&mut builder, txid, 0, amount, 10, 1);
        let before = builder.proof_id();

        let added = builder.add_utxo(
            OutPoint::new(TxId(Hash256(txid)), 1),
            Amount::from_units(amount),
            10,
            false,
            PrivateKey::from_bytes([0u8; 32]),
        );

        prop_assert!(!added);
        prop_assert_eq!(builder.stake_count(), 1);
        prop_assert_eq!(builder.proof_id(), before);
    }
}
