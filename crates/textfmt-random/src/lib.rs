//! Randomization helpers for picking rows, indexes and test inputs.
//!
//! Every helper takes its random source as an argument, so tests can pass a
//! seeded generator and get reproducible picks. [`Randomizer`] bundles a
//! source with the helpers for callers that want to hold one value.
//!
//! ```
//! use textfmt_random::Randomizer;
//!
//! let mut picker = Randomizer::seeded(7);
//! let size = picker.choice(&["S", "M", "L"]).unwrap();
//! assert!(["S", "M", "L"].contains(size));
//! assert!(picker.choice::<&str>(&[]).is_err());
//! ```

mod error;
mod pick;

pub use error::{RandomError, Result};
pub use pick::{DEFAULT_ARRAY_LENGTH, Randomizer, random_choice, random_index, unique_indexes};
