//! End-to-end flows over a `ClearAlgebra`-backed ledger: supply integrity,
//! silent-failure semantics, the allowlist gate, proof binding, owner
//! exclusivity, and the faucet schedule.

use ctl_algebra::{ClearAlgebra, Enc64};
use ctl_core::{Address, LedgerId};
use ctl_ledger::{Ledger, LedgerError, TokenMetadata};

const OWNER: Address = Address([1u8; 20]);
const ALICE: Address = Address([2u8; 20]);
const BOB: Address = Address([3u8; 20]);
const MALLORY: Address = Address([9u8; 20]);

fn ledger() -> Ledger<ClearAlgebra> {
    let mut ledger = Ledger::new(
        LedgerId::new(),
        OWNER,
        TokenMetadata::default(),
        ClearAlgebra::new(),
    )
    .unwrap();
    ledger
        .batch_set_allowed(&OWNER, &[ALICE, BOB], true)
        .unwrap();
    ledger
}

fn reveal(ledger: &Ledger<ClearAlgebra>, ct: &Enc64) -> u64 {
    ledger.algebra().reveal(ct).expect("backend-issued handle")
}

fn balance(ledger: &Ledger<ClearAlgebra>, address: &Address) -> u64 {
    reveal(ledger, &ledger.balance_of(address))
}

fn supply(ledger: &Ledger<ClearAlgebra>) -> u64 {
    reveal(ledger, &ledger.total_supply())
}

// ---- supply invariant ----

#[test]
fn test_supply_tracks_sum_of_balances_across_operations() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 500).unwrap();
    ledger.mint(&OWNER, BOB, 200).unwrap();
    ledger.burn(&OWNER, BOB, 50).unwrap();

    let (amount, proof) = ledger.algebra().encrypt(120, ledger.id(), &ALICE);
    ledger.transfer(ALICE, BOB, &amount, &proof).unwrap();

    ledger.claim_faucet(MALLORY, 0).unwrap();

    let sum = balance(&ledger, &ALICE) + balance(&ledger, &BOB) + balance(&ledger, &MALLORY);
    assert_eq!(supply(&ledger), sum);
    assert_eq!(balance(&ledger, &ALICE), 380);
    assert_eq!(balance(&ledger, &BOB), 270);
    assert_eq!(balance(&ledger, &MALLORY), ledger.faucet_amount());
}

// ---- silent failure ----

#[test]
fn test_uncovered_transfer_returns_success_and_moves_nothing() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 5).unwrap();

    let (amount, proof) = ledger.algebra().encrypt(10, ledger.id(), &ALICE);
    ledger.transfer(ALICE, BOB, &amount, &proof).unwrap();

    assert_eq!(balance(&ledger, &ALICE), 5);
    assert_eq!(balance(&ledger, &BOB), 0);
    assert_eq!(supply(&ledger), 5);
}

#[test]
fn test_uncovered_burn_leaves_balance_and_supply_unchanged() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 5).unwrap();
    ledger.burn(&OWNER, ALICE, 10).unwrap();

    assert_eq!(balance(&ledger, &ALICE), 5);
    assert_eq!(supply(&ledger), 5);
}

#[test]
fn test_uncovered_transfer_still_rotates_ciphertexts() {
    // The observable effect of a collapsed transfer is indistinguishable in
    // kind from a real one: both parties' balance ciphertexts change.
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 5).unwrap();
    let alice_before = *ledger.balance_of(&ALICE).handle();
    let bob_before = *ledger.balance_of(&BOB).handle();

    let (amount, proof) = ledger.algebra().encrypt(10, ledger.id(), &ALICE);
    ledger.transfer(ALICE, BOB, &amount, &proof).unwrap();

    assert_ne!(*ledger.balance_of(&ALICE).handle(), alice_before);
    assert_ne!(*ledger.balance_of(&BOB).handle(), bob_before);
}

// ---- allowlist gate ----

#[test]
fn test_transfer_to_non_allowlisted_recipient_fails_regardless_of_balance() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 100).unwrap();

    let (amount, proof) = ledger.algebra().encrypt(1, ledger.id(), &ALICE);
    let result = ledger.transfer(ALICE, MALLORY, &amount, &proof);
    assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
    assert_eq!(balance(&ledger, &ALICE), 100);
}

#[test]
fn test_transfer_from_non_allowlisted_sender_fails() {
    let mut ledger = ledger();
    let (amount, proof) = ledger.algebra().encrypt(1, ledger.id(), &MALLORY);
    let result = ledger.transfer(MALLORY, ALICE, &amount, &proof);
    assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
}

#[test]
fn test_delisted_party_loses_transfer_rights() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 100).unwrap();
    ledger.set_allowed(&OWNER, ALICE, false).unwrap();

    let (amount, proof) = ledger.algebra().encrypt(1, ledger.id(), &ALICE);
    let result = ledger.transfer(ALICE, BOB, &amount, &proof);
    assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
}

#[test]
fn test_double_set_allowed_equals_single_set() {
    let mut once = ledger();
    once.set_allowed(&OWNER, MALLORY, true).unwrap();

    let mut twice = ledger();
    twice.set_allowed(&OWNER, MALLORY, true).unwrap();
    twice.set_allowed(&OWNER, MALLORY, true).unwrap();

    assert_eq!(once.is_allowed(&MALLORY), twice.is_allowed(&MALLORY));
    assert_eq!(supply(&once), supply(&twice));
}

// ---- proof binding ----

#[test]
fn test_proof_minted_for_alice_cannot_be_replayed_by_bob() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 100).unwrap();
    ledger.mint(&OWNER, BOB, 100).unwrap();

    let (amount, proof) = ledger.algebra().encrypt(40, ledger.id(), &ALICE);
    let result = ledger.transfer(BOB, ALICE, &amount, &proof);
    assert!(matches!(result, Err(LedgerError::InvalidProof { .. })));
    assert_eq!(balance(&ledger, &ALICE), 100);
    assert_eq!(balance(&ledger, &BOB), 100);
}

#[test]
fn test_proof_from_another_ledger_instance_rejected() {
    let mut ledger_a = ledger();
    let ledger_b = ledger();
    ledger_a.mint(&OWNER, ALICE, 100).unwrap();

    // Same backend-independent shape, wrong instance binding.
    let (amount, proof) = ledger_a.algebra().encrypt(40, ledger_b.id(), &ALICE);
    let result = ledger_a.transfer(ALICE, BOB, &amount, &proof);
    assert!(matches!(result, Err(LedgerError::InvalidProof { .. })));
}

// ---- owner exclusivity ----

#[test]
fn test_owner_only_operations_reject_non_owner_and_leave_state_unchanged() {
    let mut ledger = ledger();
    ledger.mint(&OWNER, ALICE, 100).unwrap();
    let supply_before = supply(&ledger);

    assert!(matches!(
        ledger.mint(&ALICE, ALICE, 1),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        ledger.burn(&ALICE, ALICE, 1),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        ledger.set_allowed(&ALICE, MALLORY, true),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        ledger.batch_set_allowed(&ALICE, &[MALLORY], true),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        ledger.transfer_ownership(&ALICE, ALICE),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        ledger.set_faucet_settings(&ALICE, 1, 1),
        Err(LedgerError::Unauthorized { .. })
    ));

    assert_eq!(supply(&ledger), supply_before);
    assert!(!ledger.is_allowed(&MALLORY));
    assert_eq!(ledger.owner(), OWNER);
}

#[test]
fn test_ownership_transfer_hands_over_privileges() {
    let mut ledger = ledger();
    ledger.transfer_ownership(&OWNER, ALICE).unwrap();

    assert!(matches!(
        ledger.mint(&OWNER, BOB, 1),
        Err(LedgerError::Unauthorized { .. })
    ));
    ledger.mint(&ALICE, BOB, 1).unwrap();
    assert_eq!(balance(&ledger, &BOB), 1);
}

// ---- faucet schedule ----

#[test]
fn test_faucet_cooldown_blocks_then_credits_exactly_once_more() {
    let mut ledger = ledger();
    ledger.set_faucet_settings(&OWNER, 1_000, 3_600).unwrap();

    ledger.claim_faucet(ALICE, 10_000).unwrap();
    assert_eq!(balance(&ledger, &ALICE), 1_000);

    let result = ledger.claim_faucet(ALICE, 10_000);
    assert!(matches!(
        result,
        Err(LedgerError::CooldownActive {
            remaining_secs: 3_600
        })
    ));
    assert_eq!(balance(&ledger, &ALICE), 1_000);

    assert_eq!(ledger.time_until_next_claim(&ALICE, 12_000), 1_600);
    ledger.claim_faucet(ALICE, 13_600).unwrap();
    assert_eq!(balance(&ledger, &ALICE), 2_000);
}

#[test]
fn test_faucet_settings_apply_to_subsequent_claims() {
    let mut ledger = ledger();
    ledger.claim_faucet(ALICE, 0).unwrap();
    ledger.set_faucet_settings(&OWNER, 7, 10).unwrap();

    let later = DEFAULT_WAIT;
    ledger.claim_faucet(ALICE, later).unwrap();
    assert_eq!(
        balance(&ledger, &ALICE),
        ctl_ledger::DEFAULT_FAUCET_AMOUNT + 7
    );
}

const DEFAULT_WAIT: u64 = ctl_ledger::DEFAULT_FAUCET_COOLDOWN_SECS + 1;

// ---- round trip ----

#[test]
fn test_encrypt_reveal_round_trip_across_the_u64_range() {
    let ledger = ledger();
    let algebra = ledger.algebra();
    for value in [0u64, 1, 999_999, 1 << 32, u64::MAX - 1, u64::MAX] {
        let (ct, _proof) = algebra.encrypt(value, ledger.id(), &ALICE);
        assert_eq!(algebra.reveal(&ct), Some(value));
    }
}
