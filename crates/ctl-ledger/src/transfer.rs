//! # Transfer Engine — Branchless Confidential Transfers
//!
//! Orchestrates the allowlist gate, input-proof verification, and the
//! branchless move of encrypted value between accounts.
//!
//! ## Security Invariant
//!
//! Plaintext checks (allowlist) run before any ciphertext work. After the
//! proof check passes, the code path is identical whether or not the sender
//! can cover the amount: the sufficiency condition stays encrypted, the
//! applied amount is a homomorphic select between the requested amount and
//! zero, and the call reports success either way. An observer of state,
//! timing, or control flow cannot distinguish a real move from a collapsed
//! one; only the two account holders can, through their own decryption
//! capability.

use ctl_algebra::{CiphertextAlgebra, Enc64, InputProof};
use ctl_core::{Address, LedgerId};

use crate::accounts::AccountBook;
use crate::error::LedgerError;
use crate::registry::AccessRegistry;

/// Execute a confidential transfer of `amount` from `caller` to `to`.
///
/// # Errors
///
/// Returns [`LedgerError::Unauthorized`] if either party is not
/// allowlisted, and [`LedgerError::InvalidProof`] if the proof does not
/// bind `amount` to this ledger and `caller`. Balance insufficiency is not
/// an error.
pub(crate) fn execute<A: CiphertextAlgebra>(
    registry: &AccessRegistry,
    book: &mut AccountBook,
    algebra: &A,
    ledger_id: &LedgerId,
    caller: Address,
    to: Address,
    amount: &Enc64,
    proof: &InputProof,
) -> Result<(), LedgerError> {
    if !registry.is_allowed(&caller) {
        return Err(LedgerError::Unauthorized {
            caller,
            operation: "send a transfer",
        });
    }
    if !registry.is_allowed(&to) {
        return Err(LedgerError::Unauthorized {
            caller: to,
            operation: "receive a transfer",
        });
    }
    if !algebra.verify_proof(amount, proof, ledger_id, &caller) {
        return Err(LedgerError::InvalidProof { sender: caller });
    }

    book.ensure_initialized(algebra, caller);
    book.ensure_initialized(algebra, to);

    // The sufficiency condition never leaves ciphertext space. The applied
    // amount is computed once and moves both balances.
    let balance = book.balance_of(algebra, &caller);
    let covered = algebra.ge(&balance, amount);
    let applied = algebra.select(&covered, amount, &algebra.encrypt_zero());
    book.apply_transfer(algebra, &caller, &to, &applied);

    tracing::info!(from = %caller, to = %to, "confidential transfer applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctl_algebra::ClearAlgebra;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    struct Fixture {
        algebra: ClearAlgebra,
        registry: AccessRegistry,
        book: AccountBook,
        ledger_id: LedgerId,
    }

    /// Owner is addr(1); addr(2) and addr(3) are allowlisted; addr(2) holds 100.
    fn fixture() -> Fixture {
        let algebra = ClearAlgebra::new();
        let mut registry = AccessRegistry::new(addr(1));
        registry.set_allowed(&addr(1), addr(2), true).unwrap();
        registry.set_allowed(&addr(1), addr(3), true).unwrap();
        let mut book = AccountBook::new(&algebra);
        book.credit(&algebra, addr(2), &algebra.trivial_encrypt(100));
        Fixture {
            algebra,
            registry,
            book,
            ledger_id: LedgerId::new(),
        }
    }

    fn balance(f: &Fixture, address: Address) -> u64 {
        f.algebra
            .reveal(&f.book.balance_of(&f.algebra, &address))
            .expect("backend-issued handle")
    }

    #[test]
    fn test_covered_transfer_moves_value() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(40, &f.ledger_id, &addr(2));
        execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(3), &amount, &proof,
        )
        .unwrap();

        assert_eq!(balance(&f, addr(2)), 60);
        assert_eq!(balance(&f, addr(3)), 40);
    }

    #[test]
    fn test_uncovered_transfer_succeeds_and_moves_nothing() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(150, &f.ledger_id, &addr(2));
        execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(3), &amount, &proof,
        )
        .unwrap();

        assert_eq!(balance(&f, addr(2)), 100);
        assert_eq!(balance(&f, addr(3)), 0);
    }

    #[test]
    fn test_exact_balance_transfer_is_covered() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(100, &f.ledger_id, &addr(2));
        execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(3), &amount, &proof,
        )
        .unwrap();

        assert_eq!(balance(&f, addr(2)), 0);
        assert_eq!(balance(&f, addr(3)), 100);
    }

    #[test]
    fn test_non_allowlisted_sender_rejected_before_ciphertext_work() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(1, &f.ledger_id, &addr(9));
        let result = execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(9), addr(3), &amount, &proof,
        );
        assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
    }

    #[test]
    fn test_non_allowlisted_recipient_rejected_despite_funds() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(1, &f.ledger_id, &addr(2));
        let result = execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(9), &amount, &proof,
        );
        assert!(matches!(result, Err(LedgerError::Unauthorized { .. })));
        assert_eq!(balance(&f, addr(2)), 100);
    }

    #[test]
    fn test_replayed_proof_from_other_sender_rejected() {
        let mut f = fixture();
        // Proof minted for addr(2), replayed by addr(3).
        let (amount, proof) = f.algebra.encrypt(40, &f.ledger_id, &addr(2));
        let result = execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(3), addr(2), &amount, &proof,
        );
        assert!(matches!(result, Err(LedgerError::InvalidProof { .. })));
        assert_eq!(balance(&f, addr(2)), 100);
    }

    #[test]
    fn test_proof_for_other_ledger_rejected() {
        let mut f = fixture();
        let other = LedgerId::new();
        let (amount, proof) = f.algebra.encrypt(40, &other, &addr(2));
        let result = execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(3), &amount, &proof,
        );
        assert!(matches!(result, Err(LedgerError::InvalidProof { .. })));
    }

    #[test]
    fn test_transfer_initializes_recipient() {
        let mut f = fixture();
        assert!(!f.book.is_initialized(&addr(3)));
        let (amount, proof) = f.algebra.encrypt(10, &f.ledger_id, &addr(2));
        execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(3), &amount, &proof,
        )
        .unwrap();
        assert!(f.book.is_initialized(&addr(3)));
    }

    #[test]
    fn test_self_transfer_preserves_balance() {
        let mut f = fixture();
        let (amount, proof) = f.algebra.encrypt(40, &f.ledger_id, &addr(2));
        execute(
            &f.registry, &mut f.book, &f.algebra, &f.ledger_id,
            addr(2), addr(2), &amount, &proof,
        )
        .unwrap();
        assert_eq!(balance(&f, addr(2)), 100);
    }
}
