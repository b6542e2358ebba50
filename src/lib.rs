//! A decoder for binary dive-computer log formats.
//!
//! Each supported hardware family stores dives in its own undocumented,
//! fixed-layout binary format. Fathom decodes a raw dive buffer — acquired
//! over whatever transport the device speaks, outside this crate — into
//! dive-level facts and a time-ordered sample stream, behind one uniform
//! contract for every family.
//!
//! Construct a decoder for a known [`Family`](parser::Family) with
//! [`parser::new`], hand it the raw bytes with
//! [`set_data`](parser::Parser::set_data), then query facts with
//! [`field`](parser::Parser::field) and
//! [`datetime`](parser::Parser::datetime) or stream the body with
//! [`samples_foreach`](parser::Parser::samples_foreach):
//!
//! ```ignore
//! let mut parser = fathom::parser::new(Family::DeepSix, &DeviceInfo::default())?;
//! parser.set_data(&data)?;
//!
//! let datetime = parser.datetime()?;
//! let maxdepth = parser.field(FieldType::MaxDepth, 0)?;
//! parser.samples_foreach(&mut |sample| println!("{sample:?}"))?;
//! ```
//!
//! The buffer is borrowed, never owned: it must outlive the decoder and is
//! never mutated. Decoding is synchronous and a pure function of the bytes.

pub mod deepsix;
pub mod error;
pub mod field;
pub mod parser;
pub mod sample;

pub use error::Error;
pub use field::{FieldType, FieldValue};
pub use parser::{Family, Parser};
pub use sample::Sample;
