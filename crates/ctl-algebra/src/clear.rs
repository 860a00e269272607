//! # ClearAlgebra — Plaintext Reference Backend
//!
//! Implements [`CiphertextAlgebra`] over a table of plaintext values keyed
//! by opaque handles. The ledger core cannot tell this backend from a real
//! FHE coprocessor: handles are SHA-256 outputs uncorrelated with the values
//! they name, every operation mints a fresh handle, comparison and select
//! are evaluated branch-free via `subtle`, and input proofs are Ed25519
//! signatures under the backend's coprocessor key.
//!
//! ## Security Invariant
//!
//! This backend keeps plaintext in process memory and serializes its signing
//! seed into saved state. It is for tests and local demonstration only —
//! deployments substitute a backend whose coprocessor actually encrypts.
//!
//! ## Collaborator Surface
//!
//! Beyond the trait, `ClearAlgebra` provides the two out-of-core roles the
//! ledger expects its environment to play: [`encrypt`](ClearAlgebra::encrypt)
//! is the ciphertext producer (SDK side), and [`reveal`](ClearAlgebra::reveal)
//! is the decryption capability holder.

use std::collections::BTreeMap;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use subtle::{ConditionallySelectable, ConstantTimeGreater};

use ctl_core::{Address, LedgerId};

use crate::algebra::CiphertextAlgebra;
use crate::error::{bytes_to_hex, hex_to_bytes};
use crate::handle::{CipherHandle, Enc64, EncBool};
use crate::proof::{binding_message, InputProof};

/// Domain separation tag for handle derivation.
const HANDLE_DOMAIN: &[u8] = b"ctl.handle.v1";

/// The handle-to-plaintext cell table.
#[derive(Debug, Clone, Default)]
struct CellTable {
    /// Monotonic counter feeding handle derivation.
    counter: u64,
    /// Encrypted-integer cells.
    words: BTreeMap<CipherHandle, u64>,
    /// Encrypted-boolean cells.
    flags: BTreeMap<CipherHandle, bool>,
}

/// Plaintext-backed reference implementation of the ciphertext algebra.
pub struct ClearAlgebra {
    /// The coprocessor key that signs and verifies input proofs.
    signing: SigningKey,
    cells: Mutex<CellTable>,
}

impl ClearAlgebra {
    /// Create a backend with a freshly generated coprocessor key.
    pub fn new() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            signing: SigningKey::generate(&mut csprng),
            cells: Mutex::new(CellTable::default()),
        }
    }

    /// Create a backend from a fixed 32-byte seed. Deterministic: the same
    /// seed yields the same coprocessor key and the same handle sequence.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed),
            cells: Mutex::new(CellTable::default()),
        }
    }

    /// Produce a proven ciphertext for `value`, bound to `ledger` and
    /// `sender`. This is the ciphertext-producer role the ledger leaves to
    /// its callers: tests and the CLI stand in for the client SDK here.
    pub fn encrypt(&self, value: u64, ledger: &LedgerId, sender: &Address) -> (Enc64, InputProof) {
        let ciphertext = self.mint_word(value);
        let msg = binding_message(ledger, sender, ciphertext.handle());
        let sig = self.signing.sign(&msg);
        (ciphertext, InputProof::from_bytes(sig.to_bytes()))
    }

    /// Decrypt an encrypted integer. `None` for handles this backend never
    /// issued. Stands in for the out-of-core decryption capability; a real
    /// deployment gates this on the requester's key material.
    pub fn reveal(&self, ciphertext: &Enc64) -> Option<u64> {
        self.cells.lock().words.get(ciphertext.handle()).copied()
    }

    /// Decrypt an encrypted boolean. `None` for unknown handles.
    pub fn reveal_bool(&self, flag: &EncBool) -> Option<bool> {
        self.cells.lock().flags.get(flag.handle()).copied()
    }

    /// Derive the next fresh handle.
    ///
    /// Handles mix the coprocessor public key with a monotonic counter, so
    /// they are unique per backend and carry no trace of the cell value.
    fn next_handle(&self, table: &mut CellTable) -> CipherHandle {
        table.counter += 1;
        let mut hasher = Sha256::new();
        hasher.update(HANDLE_DOMAIN);
        hasher.update(self.signing.verifying_key().as_bytes());
        hasher.update(table.counter.to_be_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        CipherHandle::from_bytes(bytes)
    }

    /// Store a value under a fresh handle.
    fn mint_word(&self, value: u64) -> Enc64 {
        let mut table = self.cells.lock();
        let handle = self.next_handle(&mut table);
        table.words.insert(handle, value);
        Enc64::from_handle(handle)
    }

    /// Store a boolean under a fresh handle.
    fn mint_flag(&self, value: bool) -> EncBool {
        let mut table = self.cells.lock();
        let handle = self.next_handle(&mut table);
        table.flags.insert(handle, value);
        EncBool::from_handle(handle)
    }

    /// The cell value behind a handle. Unknown handles read as zero; they
    /// can only reach arithmetic through ledger state, which this backend
    /// populated itself, so the fallback is never observable in practice.
    fn word(&self, ciphertext: &Enc64) -> u64 {
        self.cells
            .lock()
            .words
            .get(ciphertext.handle())
            .copied()
            .unwrap_or(0)
    }

    /// The cell value behind a boolean handle. Unknown handles read as
    /// false, the fail-closed direction for a select condition.
    fn flag(&self, flag: &EncBool) -> bool {
        self.cells
            .lock()
            .flags
            .get(flag.handle())
            .copied()
            .unwrap_or(false)
    }
}

impl CiphertextAlgebra for ClearAlgebra {
    fn encrypt_zero(&self) -> Enc64 {
        self.mint_word(0)
    }

    fn trivial_encrypt(&self, value: u64) -> Enc64 {
        self.mint_word(value)
    }

    fn add(&self, a: &Enc64, b: &Enc64) -> Enc64 {
        let sum = self.word(a).wrapping_add(self.word(b));
        self.mint_word(sum)
    }

    fn sub(&self, a: &Enc64, b: &Enc64) -> Enc64 {
        let diff = self.word(a).wrapping_sub(self.word(b));
        self.mint_word(diff)
    }

    fn ge(&self, a: &Enc64, b: &Enc64) -> EncBool {
        let a_val = self.word(a);
        let b_val = self.word(b);
        // a >= b  <=>  !(b > a), evaluated without a data-dependent branch.
        let ge = !b_val.ct_gt(&a_val);
        self.mint_flag(bool::from(ge))
    }

    fn select(&self, cond: &EncBool, if_true: &Enc64, if_false: &Enc64) -> Enc64 {
        let choice = subtle::Choice::from(self.flag(cond) as u8);
        let t = self.word(if_true);
        let f = self.word(if_false);
        self.mint_word(u64::conditional_select(&f, &t, choice))
    }

    fn verify_proof(
        &self,
        ciphertext: &Enc64,
        proof: &InputProof,
        ledger: &LedgerId,
        sender: &Address,
    ) -> bool {
        let msg = binding_message(ledger, sender, ciphertext.handle());
        let sig = Signature::from_bytes(proof.as_bytes());
        self.signing.verifying_key().verify(&msg, &sig).is_ok()
    }
}

impl Default for ClearAlgebra {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ClearAlgebra {
    fn clone(&self) -> Self {
        Self {
            signing: self.signing.clone(),
            cells: Mutex::new(self.cells.lock().clone()),
        }
    }
}

impl std::fmt::Debug for ClearAlgebra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.cells.lock();
        write!(
            f,
            "ClearAlgebra(<coprocessor key>, {} cells)",
            table.words.len() + table.flags.len()
        )
    }
}

// ── Serde ──────────────────────────────────────────────────────────────

/// Serialized form of the backend: signing seed plus the full cell table.
/// The seed is secret material; saved state inherits this backend's
/// tests-and-demos-only status.
#[derive(Serialize, Deserialize)]
struct ClearAlgebraRepr {
    seed: String,
    counter: u64,
    words: BTreeMap<CipherHandle, u64>,
    flags: BTreeMap<CipherHandle, bool>,
}

impl Serialize for ClearAlgebra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.cells.lock();
        let repr = ClearAlgebraRepr {
            seed: bytes_to_hex(&self.signing.to_bytes()),
            counter: table.counter,
            words: table.words.clone(),
            flags: table.flags.clone(),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClearAlgebra {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ClearAlgebraRepr::deserialize(deserializer)?;
        if repr.seed.len() != 64 {
            return Err(serde::de::Error::custom("signing seed hex must be 64 chars"));
        }
        let bytes = hex_to_bytes(&repr.seed).map_err(serde::de::Error::custom)?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        Ok(Self {
            signing: SigningKey::from_bytes(&seed),
            cells: Mutex::new(CellTable {
                counter: repr.counter,
                words: repr.words,
                flags: repr.flags,
            }),
        })
    }
}
