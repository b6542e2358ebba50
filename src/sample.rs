//! The streaming sample protocol.
//!
//! A decoder's `samples_foreach` walks the body of a dive and publishes a
//! sequence of tagged values to a caller-supplied closure, strictly in
//! increasing time order. One physical record in the source buffer yields
//! several separate deliveries describing the same instant (its time offset,
//! then each derived reading), never one aggregate object.

/// One tagged value of a dive's time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Seconds elapsed since the start of the dive. Opens every instant.
    Time(u32),
    /// Depth in metres.
    Depth(f64),
    /// Water temperature in degrees Celsius.
    Temperature(f64),
    /// Pressure of one tank in bar.
    Pressure {
        /// Index of the tank being read.
        tank: u32,
        bar: f64,
    },
    /// Switch to the gas mix at an index.
    GasMix(u32),
    /// An event raised by the dive computer.
    Event(EventKind),
}

/// Events a dive computer can raise mid-dive.
///
/// Not every family reports events; formats without self-describing event
/// records never deliver these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Entered a decompression obligation.
    Deco,
    /// Ascent rate warning.
    Ascent,
    /// Ceiling violation.
    Ceiling,
    /// Surfaced mid-dive.
    Surface,
    /// User-placed bookmark.
    Bookmark,
}
