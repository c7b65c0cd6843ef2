//! Growable integer list for the Ori runtime.
//!
//! `IntVec` is the storage behind `[int]` values in compiled programs: a
//! contiguous, exclusively owned buffer of `i64` with Python-style negative
//! indexing, amortized doubling on append, and shrink-on-underuse after
//! removals.
//!
//! # Capacity Policy
//!
//! - **Growth**: an append into a full vector doubles its capacity first.
//!   A vector at zero capacity grows to the configured minimum instead.
//! - **Shrink**: after a removal, capacity is halved while it is at least
//!   four times the length, never going below the configured minimum.
//!
//! See [`IntVecConfig`] for the tunable initial and minimum capacities.
//!
//! # Errors
//!
//! Every fallible operation returns [`IntVecResult`]. Out-of-range indices
//! produce [`IntVecError::IndexOutOfBounds`] instead of aborting, so the
//! caller decides whether to propagate or recover.
//!
//! ```
//! use ori_intvec::{IntVec, IntVecError};
//!
//! let mut list = IntVec::from_slice(&[1, 2, 3]).unwrap();
//! list.inc(-1, 10).unwrap();
//! assert_eq!(list.as_slice(), &[1, 2, 13]);
//! assert_eq!(
//!     list.get(5),
//!     Err(IntVecError::IndexOutOfBounds { length: 3, requested: 5, resolved: 5 })
//! );
//! ```
//!
//! # Debugging
//!
//! Capacity changes are traced at `trace` level and rejected indices at
//! `debug` level. Call [`init_tracing`] once and run with
//! `RUST_LOG=ori_intvec=trace` to see them.

mod config;
mod error;
mod growth;
mod int_vec;

use std::sync::Once;

pub use config::{IntVecConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MIN_CAPACITY};
pub use error::{IntVecError, IntVecResult};
pub use int_vec::IntVec;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ori_intvec=debug` or `RUST_LOG=ori_intvec=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host program.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
