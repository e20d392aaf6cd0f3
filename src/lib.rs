//! Balanced, run-limited bit sequences with globally unique 32-bit windows.
//!
//! This crate generates long bit sequences (65536 bits and up) where every
//! window of 32 consecutive bits is nearly balanced, every window reads as a
//! distinct `u32`, and no run of identical bits exceeds eight. A separate
//! verifier re-checks all of that from the raw bits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   generate/      │────▶│   verify/    │
//! │ (Bit, limits│     │ (explicit-stack  │     │ (three passes│
//! │  Generation)│     │  backtracking)   │     │ VerifiedBits)│
//! └─────────────┘     └──────────────────┘     └──────────────┘
//!        │                     │                      │
//!        ▼                     ▼                      ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │               window.rs  +  contracts.rs                    │
//! │   (rolling vs from-scratch window values, debug contracts)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Constraints
//!
//! | Constraint  | Bound                                   | Checked by        |
//! |-------------|-----------------------------------------|-------------------|
//! | Balance     | `\|ones - zeros\| ≤ 4` per 32-bit window | `check_balance`   |
//! | Uniqueness  | all window values distinct              | `check_unique`    |
//! | Runs        | no run longer than 8                    | `check_runs`      |
//!
//! # Usage
//!
//! ```no_run
//! use bitloom::{generate, verify};
//!
//! let generation = generate(65_536).expect("length holds a full window");
//! if generation.success {
//!     assert!(verify(&generation.bits));
//! }
//! ```

// Module declarations
pub mod contracts;
pub mod generate;
pub mod testing;
mod types;
pub mod verify;
pub mod window;

// Re-exports for public API
pub use generate::{
    entropy_source, generate, generate_seeded, generate_with, seeded_source, BitSource,
    GenerateError,
};
pub use types::{
    bits_from_str, bits_to_string, Bit, Generation, InvalidBit, SearchStats, DEFAULT_LENGTH,
    MAX_DRIFT, MAX_IMBALANCE, MAX_RUN, WINDOW_BITS, WINDOW_SHIFT_MASK,
};
pub use verify::{
    check, check_balance, check_runs, check_unique, verify, VerifiedBits, Violation,
};
pub use window::{next_window_value, window_value, WindowValues};
