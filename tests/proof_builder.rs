//! Integration tests for proof building through the public API
//!
//! Covers the end-to-end scenario plus the builder lifecycle:
//! - Two stakes signed in insertion order against the built proof id
//! - Rejected keys leave no trace
//! - Empty and reused builders produce empty proofs

use stakeproof::hash::Hash256;
use stakeproof::proof::compute_proof_id;
use stakeproof::{Amount, OutPoint, PrivateKey, ProofBuilder, ProofId, PublicKey, TxId};

fn key(id: u8) -> PrivateKey {
    let mut bytes = [0u8; 32];
    bytes[0] = id;
    bytes[31] = 0x7f;
    PrivateKey::from_bytes(bytes)
}

fn pubkey(id: u8) -> PublicKey {
    key(id).public_key().expect("test key is valid")
}

fn utxo(id: u8, vout: u32) -> OutPoint {
    OutPoint::new(TxId(Hash256([id; 32])), vout)
}

#[test]
fn test_end_to_end_two_stakes() {
    let mut builder = ProofBuilder::new(7, 1000, pubkey(100));

    assert!(builder.add_utxo(utxo(1, 0), Amount::from_units(5000), 100, false, key(1)));
    assert!(builder.add_utxo(utxo(2, 1), Amount::from_units(3000), 200, true, key(2)));
    let expected_id = builder.proof_id();

    let proof = builder.build();

    assert_eq!(proof.sequence(), 7);
    assert_eq!(proof.expiration_time(), 1000);
    assert_eq!(proof.master(), &pubkey(100));
    assert_eq!(proof.id(), expected_id);
    assert_eq!(proof.staked_amount(), Amount::from_units(8000));

    let stakes = proof.stakes();
    assert_eq!(stakes.len(), 2);

    // Order is preserved: [S1, S2]
    let s1 = stakes[0].stake();
    assert_eq!(s1.utxo(), &utxo(1, 0));
    assert_eq!(s1.amount(), Amount::from_units(5000));
    assert_eq!(s1.height(), 100);
    assert!(!s1.is_coinbase());
    assert_eq!(s1.pubkey(), &pubkey(1));

    let s2 = stakes[1].stake();
    assert_eq!(s2.utxo(), &utxo(2, 1));
    assert_eq!(s2.amount(), Amount::from_units(3000));
    assert_eq!(s2.height(), 200);
    assert!(s2.is_coinbase());
    assert_eq!(s2.pubkey(), &pubkey(2));

    // Each signature verifies with its own stake key against the proof id
    for signed in stakes {
        let hash = signed.stake().hash(&expected_id);
        assert!(signed.stake().pubkey().verify_schnorr(&hash, signed.signature()));
        assert!(!signed.is_poisoned());
    }

    // And not with the other stake's key
    let hash = stakes[0].stake().hash(&expected_id);
    assert!(!pubkey(2).verify_schnorr(&hash, stakes[0].signature()));
}

#[test]
fn test_builder_id_matches_standalone_computation() {
    let mut builder = ProofBuilder::new(7, 1000, pubkey(100));
    assert!(builder.add_utxo(utxo(1, 0), Amount::from_units(5000), 100, false, key(1)));

    let proof = builder.build();
    let stakes = proof.stakes().iter().map(|s| s.stake());

    assert_eq!(
        compute_proof_id(7, 1000, stakes, &pubkey(100)),
        proof.id()
    );
}

#[test]
fn test_signature_does_not_transfer_between_proofs() {
    // Same stake, different co-stakes: the signature must not carry over
    let mut alone = ProofBuilder::new(1, 2, pubkey(100));
    assert!(alone.add_utxo(utxo(1, 0), Amount::from_units(10), 5, false, key(1)));
    let alone = alone.build();

    let mut with_other = ProofBuilder::new(1, 2, pubkey(100));
    assert!(with_other.add_utxo(utxo(1, 0), Amount::from_units(10), 5, false, key(1)));
    assert!(with_other.add_utxo(utxo(2, 0), Amount::from_units(10), 5, false, key(2)));
    let with_other = with_other.build();

    assert_ne!(alone.id(), with_other.id());
    assert!(!alone.stakes()[0].verify(&with_other.id()));
    assert!(!with_other.stakes()[0].verify(&alone.id()));
}

#[test]
fn test_invalid_key_leaves_builder_unchanged() {
    let mut builder = ProofBuilder::new(0, 0, pubkey(100));
    let empty_id = builder.proof_id();

    let added = builder.add_utxo(
        utxo(1, 0),
        Amount::from_units(10),
        1,
        false,
        PrivateKey::from_bytes([0u8; 32]),
    );

    assert!(!added);
    assert_eq!(builder.stake_count(), 0);
    assert_eq!(builder.proof_id(), empty_id);
}

#[test]
fn test_empty_builder_produces_empty_proof() {
    let mut builder = ProofBuilder::new(3, 4, pubkey(100));
    let proof = builder.build();

    assert!(proof.stakes().is_empty());
    assert_eq!(proof.staked_amount(), Amount::ZERO);
    assert_eq!(
        proof.id(),
        compute_proof_id(3, 4, std::iter::empty(), &pubkey(100))
    );
}

#[test]
fn test_second_build_is_empty() {
    let mut builder = ProofBuilder::new(3, 4, pubkey(100));
    assert!(builder.add_utxo(utxo(1, 0), Amount::from_units(10), 1, false, key(1)));

    let first = builder.build();
    assert_eq!(builder.stake_count(), 0);
    let second = builder.build();

    assert_eq!(first.stakes().len(), 1);
    assert!(second.stakes().is_empty());
    assert_ne!(first, second);
    assert_eq!(second.id(), ProofBuilder::new(3, 4, pubkey(100)).proof_id());
}

#[test]
fn test_many_stakes_keep_order() {
    let mut builder = ProofBuilder::new(0, 0, pubkey(100));
    for id in 1..=20u8 {
        assert!(builder.add_utxo(
            utxo(id, id as u32),
            Amount::from_units(id as i64 * 100),
            id as u32,
            id % 3 == 0,
            key(id),
        ));
    }

    let proof = builder.build();
    let id = proof.id();

    assert_eq!(proof.stakes().len(), 20);
    for (index, signed) in proof.stakes().iter().enumerate() {
        assert_eq!(signed.stake().utxo(), &utxo(index as u8 + 1, index as u32 + 1));
        assert!(signed.verify(&id));
    }
    assert!(!proof.stakes()[0].verify(&ProofId::from(Hash256([0; 32]))));
}

#[test]
fn test_proof_json_roundtrip() {
    let mut builder = ProofBuilder::new(7, 1000, pubkey(100));
    assert!(builder.add_utxo(utxo(1, 0), Amount::from_units(5000), 100, false, key(1)));
    let proof = builder.build();

    let json = serde_json::to_string(&proof).unwrap();
    let decoded: stakeproof::Proof = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, proof);
    assert!(json.contains(&pubkey(100).to_hex()));
}
