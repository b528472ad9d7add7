//! IBM System/360 hexadecimal floating point conversion.
//!
//! Legacy meteorological archives, such as Unified Model fieldsfiles written
//! on IBM hardware, store reals as 32-bit base-16 floats. This crate converts
//! those words into IEEE-754 binary32 values, widened to binary64.
//!
//! # Example
//!
//! ```
//! use ibm_float::{decode_one, DecodeError};
//!
//! assert_eq!(decode_one(0xC276_A000).unwrap(), -118.625);
//! assert!(matches!(decode_one(0x7FFF_FFFF), Err(DecodeError::Overflow { .. })));
//! ```

pub mod batch;
pub mod config;
pub mod decode;
pub mod error;
pub mod word;

pub use batch::{decode_field, decode_many, par_decode_many, DecodedField};
pub use config::{BatchConfig, OverflowPolicy, UM_MISSING_DATA};
pub use decode::{decode_bits, decode_one, decode_simple};
pub use error::{BatchError, DecodeError, DecodeResult};
pub use word::{IbmFloat32, Ieee32Float};
