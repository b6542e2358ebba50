//! Decoder for the Deep Six Excursion.
//!
//! A dive is a fixed 256-byte little-endian header followed by contiguous
//! 4-byte sample records (temperature then absolute pressure, both LE16).
//! There is no checksum and no self-describing record boundary; trailing
//! bytes that do not complete a record are dropped.

use log::warn;
use zerocopy::FromBytes;
use zerocopy::byteorder::little_endian::U16;

use crate::error::Error;
use crate::field::{DiveMode, FieldCache, FieldType, FieldValue, GasMix};
use crate::parser::{DateTime, Family, Parser};
use crate::sample::Sample;

const HEADER_SIZE: usize = 256;
const RECORD_SIZE: usize = 4;

/// Absolute pressure at the surface, in millibar.
const SURFACE_PRESSURE: u32 = 1013;

const ACTIVITY_SCUBA: u8 = 2;
const ACTIVITY_GAUGE: u8 = 3;
const ACTIVITY_FREEDIVE: u8 = 4;

// The decoded prefix of the header:
//  0: LE16 dive number
//  2: activity type (2 = scuba, 3 = gauge, 4 = freedive)
//  3: O2 percentage
//  6: LE16 year
//  8: day of month
//  9: month
// 10: minute
// 11: hour
// 12: LE16 dive time (seconds for freedives, minutes otherwise)
// 16: LE16 surface pressure
// 22: LE16 max depth pressure (millibar, absolute)
// 24: LE16 water temperature
// 26: sample interval (seconds; 20 for scuba/gauge, 1 for freedives)
// The remainder of the 256 bytes is unidentified.
#[repr(C, packed)]
#[derive(FromBytes)]
struct Header {
    _dive_number: U16,
    activity: u8,
    oxygen: u8,
    _unknown0: [u8; 2],
    year: U16,
    day: u8,
    month: u8,
    minute: u8,
    hour: u8,
    dive_time: U16,
    _unknown1: [u8; 2],
    _surface_pressure: U16,
    _unknown2: [u8; 4],
    max_pressure: U16,
    _water_temperature: U16,
    sample_interval: u8,
    _unknown3: u8,
}

impl Header {
    /// Read the header prefix. `data` must hold at least [`HEADER_SIZE`]
    /// bytes.
    fn read(data: &[u8]) -> Self {
        let prefix: [u8; size_of::<Header>()] = data[..size_of::<Header>()].try_into().unwrap();
        zerocopy::transmute!(prefix)
    }
}

/// One body record.
#[repr(C, packed)]
#[derive(FromBytes)]
struct Record {
    /// Water temperature in tenths of a degree Celsius.
    temperature: U16,
    /// Absolute pressure in millibar.
    pressure: U16,
}

impl Record {
    /// Read one record. `data` must hold exactly [`RECORD_SIZE`] bytes.
    fn read(data: &[u8]) -> Self {
        let record: [u8; RECORD_SIZE] = data.try_into().unwrap();
        zerocopy::transmute!(record)
    }
}

/// Convert an absolute pressure in millibar to a depth in metres.
fn pressure_to_depth(mbar: u32) -> f64 {
    // Specific weight of seawater (millibar to cm).
    const SPECIFIC_WEIGHT: f64 = 1.024 * 0.980665;

    if mbar < SURFACE_PRESSURE {
        return 0.0;
    }
    f64::from(mbar - SURFACE_PRESSURE) / SPECIFIC_WEIGHT / 100.0
}

/// Decoder for the Deep Six Excursion family.
pub struct DeepSix<'data> {
    data: Option<&'data [u8]>,
    /// Seconds between body records.
    sample_interval: u32,
    cache: FieldCache,
}

impl DeepSix<'_> {
    pub fn new() -> Self {
        Self {
            data: None,
            sample_interval: 0,
            cache: FieldCache::default(),
        }
    }
}

impl Default for DeepSix<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'data> Parser<'data> for DeepSix<'data> {
    fn family(&self) -> Family {
        Family::DeepSix
    }

    fn set_data(&mut self, data: &'data [u8]) -> Result<(), Error> {
        if data.len() < HEADER_SIZE {
            return Err(Error::Io);
        }
        let header = Header::read(data);

        let mut cache = FieldCache::default();
        let mut divetime = u32::from(header.dive_time.get());

        match header.activity {
            ACTIVITY_SCUBA => {
                // Dive time is in minutes.
                divetime *= 60;
                let mix = GasMix {
                    oxygen: f64::from(header.oxygen) / 100.0,
                    helium: 0.0,
                };
                cache.assign_gasmix(0, mix)?;
                cache.assign_gasmix_count(1);
                cache.assign_divemode(DiveMode::OpenCircuit);
            }
            ACTIVITY_GAUGE => {
                divetime *= 60;
                cache.assign_divemode(DiveMode::Gauge);
            }
            ACTIVITY_FREEDIVE => {
                // Dive time is already in seconds.
                cache.assign_divemode(DiveMode::Freedive);
            }
            other => warn!("deepsix: unknown activity type {other:#04x}"),
        }

        cache.assign_divetime(divetime);
        cache.assign_maxdepth(pressure_to_depth(u32::from(header.max_pressure.get())));

        self.data = Some(data);
        self.sample_interval = u32::from(header.sample_interval);
        self.cache = cache;

        Ok(())
    }

    fn datetime(&self) -> Result<DateTime, Error> {
        let data = self.data.ok_or(Error::Io)?;
        let header = Header::read(data);

        Ok(DateTime {
            year: header.year.get(),
            month: header.month,
            day: header.day,
            hour: header.hour,
            minute: header.minute,
            second: 0,
            utc_offset: None,
        })
    }

    fn field(&self, ty: FieldType, index: u32) -> Result<FieldValue, Error> {
        match ty {
            // The format has no tank records; the tank count mirrors the
            // gas mixes.
            FieldType::TankCount => self.cache.get(FieldType::GasMixCount, index),
            FieldType::Tank => Err(Error::Unsupported),
            _ => self.cache.get(ty, index),
        }
    }

    fn samples_foreach(&self, emit: &mut dyn FnMut(Sample)) -> Result<(), Error> {
        let data = self.data.ok_or(Error::Io)?;
        let body = &data[HEADER_SIZE..];

        for (n, bytes) in body.chunks_exact(RECORD_SIZE).enumerate() {
            let record = Record::read(bytes);

            emit(Sample::Time((n as u32 + 1) * self.sample_interval));
            emit(Sample::Depth(pressure_to_depth(u32::from(
                record.pressure.get(),
            ))));
            emit(Sample::Temperature(
                f64::from(record.temperature.get()) / 10.0,
            ));
        }

        Ok(())
    }
}
