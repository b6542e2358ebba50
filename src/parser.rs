//! The uniform decoder contract and the family factory.
//!
//! Every supported hardware family decodes behind the same [`Parser`]
//! contract: the caller hands over one raw dive buffer with
//! [`set_data`](Parser::set_data), then queries dive-level facts and streams
//! the sample body any number of times. Construct an instance for a known
//! family with [`new`].

use crate::deepsix::DeepSix;
use crate::error::Error;
use crate::field::{FieldType, FieldValue};
use crate::sample::Sample;

/// A calendar date and time decoded from a dive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset from UTC in seconds, if the format records one.
    pub utc_offset: Option<i32>,
}

/// A device/host clock correlation, pairing a device tick counter with the
/// host time it was observed at.
///
/// Families that store sample timestamps as relative device ticks need this
/// pair to place a dive in calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSync {
    /// Device tick counter.
    pub devtime: u32,
    /// Host time at the moment `devtime` was read, in seconds since the
    /// Unix epoch.
    pub systime: i64,
}

/// Identity of the dive computer a buffer was read from, used to select a
/// format revision within a family.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceInfo {
    /// Model number, disambiguating historical layouts within a family.
    pub model: u32,
    /// Serial number, for families whose revisions are keyed by it.
    pub serial: u32,
    /// Clock correlation, for families storing relative device ticks.
    pub clock: Option<ClockSync>,
}

/// The closed set of supported dive-computer families.
///
/// A family identifies one vendor+model lineage of compatible binary log
/// formats, and selects the decoding algorithm in [`new`]. New families are
/// added here and in the factory, keeping dispatch exhaustive at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Deep Six Excursion.
    DeepSix,
}

/// The capability set every family-specific decoder satisfies.
///
/// An instance never owns the dive buffer: `set_data` borrows it for the
/// instance's remaining lifetime, and dropping the instance releases only
/// decoder-owned state. Operations a format cannot satisfy report
/// [`Error::Unsupported`]; the optional operations default to that.
///
/// A decode is a pure function of the buffer: repeated queries on an
/// unmodified instance return identical results, and repeated
/// `samples_foreach` calls deliver identical sequences.
pub trait Parser<'data> {
    /// The family this decoder handles.
    fn family(&self) -> Family;

    /// Decode the header of a raw dive buffer, staging dive-level facts.
    ///
    /// Fails with [`Error::Io`] if the buffer is shorter than the family's
    /// minimum header, leaving any previously staged facts untouched.
    /// Calling again replaces the previous decode entirely.
    fn set_data(&mut self, data: &'data [u8]) -> Result<(), Error>;

    /// The calendar date and time the dive started.
    ///
    /// Fails with [`Error::Io`] before a successful [`set_data`], and with
    /// [`Error::Unsupported`] if the format has no absolute clock.
    fn datetime(&self) -> Result<DateTime, Error> {
        Err(Error::Unsupported)
    }

    /// Look up one dive-level fact staged by [`set_data`].
    ///
    /// `index` selects an entry of an array-typed fact and is ignored
    /// otherwise. Fails with [`Error::Unsupported`] for a fact this format
    /// or this dive does not record, and with [`Error::InvalidArguments`]
    /// for an index at or beyond the declared count; an absent fact is never
    /// substituted with a default.
    fn field(&self, ty: FieldType, index: u32) -> Result<FieldValue, Error> {
        let _ = (ty, index);
        Err(Error::Unsupported)
    }

    /// Decode the body, delivering each sample value to `emit` in strictly
    /// increasing time order.
    ///
    /// Fails with [`Error::Io`] before a successful [`set_data`]. Runs to
    /// the end of the buffer; there is no early-termination mechanism.
    fn samples_foreach(&self, emit: &mut dyn FnMut(Sample)) -> Result<(), Error> {
        let _ = emit;
        Err(Error::Unsupported)
    }
}

/// Construct a decoder for a family.
///
/// `device` carries the model/serial/clock tuple some families need to
/// disambiguate format revisions or anchor relative timestamps; the Deep Six
/// Excursion format needs none of it. Exactly one decoder variant is
/// selected per family.
pub fn new<'data>(
    family: Family,
    _device: &DeviceInfo,
) -> Result<Box<dyn Parser<'data> + 'data>, Error> {
    match family {
        Family::DeepSix => Ok(Box::new(DeepSix::new())),
    }
}
