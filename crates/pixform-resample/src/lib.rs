//! pixform-resample - Bilinear resampling for pixform
//!
//! This crate implements the resampling core: inverse coordinate mapping
//! with 4-neighbor bilinear weighting. Bilinear is the only interpolation
//! mode; there is no mode switch.
//!
//! The transform is a pure function: it borrows the source buffer, owns
//! the destination it allocates, and keeps no state between calls. Either
//! a fully populated destination buffer is returned or a typed error is;
//! there is no partial-failure mode. Each destination pixel depends only
//! on a fixed read-only region of the source, so the per-pixel loop is
//! independent across rows; execution is nonetheless single-threaded and
//! synchronous.

mod bilinear;
mod error;

pub use bilinear::{resample, resample_to_size};
pub use error::{ResampleError, ResampleResult};
