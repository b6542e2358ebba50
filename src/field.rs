//! Dive-level facts and the per-decode field cache.
//!
//! A decoder stages everything it learns from a dive header in a
//! [`FieldCache`] during `set_data`, and answers field queries from the cache
//! afterward. The cache is sparse: a fact that a format does not record is
//! simply never assigned, and querying it fails with
//! [`Error::Unsupported`] rather than yielding a default.

use tinyvec::ArrayVec;

use crate::error::Error;

/// Maximum number of gas mixes per dive.
pub const MAX_GASES: usize = 16;
/// Maximum number of tanks per dive.
pub const MAX_TANKS: usize = 16;
/// Maximum number of free-text annotations per dive.
pub const MAX_STRINGS: usize = 16;

/// Classification of the activity recorded in a dive log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiveMode {
    /// Breath-hold diving.
    Freedive,
    /// Depth and time only, no gas tracking.
    Gauge,
    /// Open-circuit scuba.
    OpenCircuit,
    /// Closed-circuit rebreather.
    ClosedCircuit,
    /// Semi-closed rebreather.
    SemiClosedCircuit,
}

/// The composition of a breathing gas, as fractions summing to one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GasMix {
    /// Fraction of oxygen.
    pub oxygen: f64,
    /// Fraction of helium.
    pub helium: f64,
}

impl GasMix {
    /// The fraction of the mix that is neither oxygen nor helium.
    pub fn nitrogen(&self) -> f64 {
        1.0 - self.oxygen - self.helium
    }
}

/// A tank and its pressure readings over the dive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tank {
    /// Index of the [`GasMix`] carried in this tank.
    pub gasmix: u32,
    /// Water volume in litres.
    pub volume: f64,
    /// Rated working pressure in bar.
    pub work_pressure: f64,
    /// Pressure at the start of the dive in bar.
    pub begin_pressure: f64,
    /// Pressure at the end of the dive in bar.
    pub end_pressure: f64,
}

/// The kind of water a dive took place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterKind {
    Fresh,
    Salt,
}

/// Water salinity as recorded by the dive computer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salinity {
    pub kind: WaterKind,
    /// Density in kg/l.
    pub density: f64,
}

/// A free-text annotation attached to a dive, such as a serial number or a
/// firmware version, labelled by a short description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    pub desc: String,
    pub value: String,
}

/// The closed set of dive-level fact types a decoder can stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Total duration in seconds.
    DiveTime,
    /// Maximum depth in metres.
    MaxDepth,
    /// Average depth in metres.
    AvgDepth,
    /// Surface atmospheric pressure in bar.
    Atmospheric,
    /// Water salinity.
    Salinity,
    /// Activity classification.
    DiveMode,
    /// Number of gas mixes recorded.
    GasMixCount,
    /// One gas mix, selected by index.
    GasMix,
    /// Number of tanks recorded.
    TankCount,
    /// One tank, selected by index.
    Tank,
    /// One free-text annotation, selected by index.
    String,
}

impl FieldType {
    /// Every fact type, for exhaustive iteration.
    pub const ALL: [FieldType; 11] = [
        FieldType::DiveTime,
        FieldType::MaxDepth,
        FieldType::AvgDepth,
        FieldType::Atmospheric,
        FieldType::Salinity,
        FieldType::DiveMode,
        FieldType::GasMixCount,
        FieldType::GasMix,
        FieldType::TankCount,
        FieldType::Tank,
        FieldType::String,
    ];
}

/// A queried fact, tagged with its representation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Seconds, for [`FieldType::DiveTime`].
    DiveTime(u32),
    /// Metres, for [`FieldType::MaxDepth`] and [`FieldType::AvgDepth`].
    Depth(f64),
    /// Bar, for [`FieldType::Atmospheric`].
    Pressure(f64),
    Salinity(Salinity),
    Mode(DiveMode),
    /// For [`FieldType::GasMixCount`] and [`FieldType::TankCount`].
    Count(u32),
    GasMix(GasMix),
    Tank(Tank),
    Text(Annotation),
}

/// Sparse, presence-tracked store of dive-level facts.
///
/// Scalar facts are optional fields; array facts pair a bounded store with a
/// separately cached count scalar. Keeping a count consistent with the
/// entries written is the assigning decoder's responsibility; the cache only
/// rejects indices beyond the declared count or the fixed capacity.
#[derive(Debug, Clone, Default)]
pub struct FieldCache {
    divetime: Option<u32>,
    maxdepth: Option<f64>,
    avgdepth: Option<f64>,
    atmospheric: Option<f64>,
    salinity: Option<Salinity>,
    divemode: Option<DiveMode>,
    gasmix_count: Option<u32>,
    gasmixes: ArrayVec<[GasMix; MAX_GASES]>,
    tank_count: Option<u32>,
    tanks: ArrayVec<[Tank; MAX_TANKS]>,
    strings: ArrayVec<[Annotation; MAX_STRINGS]>,
}

impl FieldCache {
    /// Reset every fact to its unset state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record the total duration in seconds.
    pub fn assign_divetime(&mut self, seconds: u32) {
        self.divetime = Some(seconds);
    }

    /// Record the maximum depth in metres.
    pub fn assign_maxdepth(&mut self, metres: f64) {
        self.maxdepth = Some(metres);
    }

    /// Record the average depth in metres.
    pub fn assign_avgdepth(&mut self, metres: f64) {
        self.avgdepth = Some(metres);
    }

    /// Record the surface atmospheric pressure in bar.
    pub fn assign_atmospheric(&mut self, bar: f64) {
        self.atmospheric = Some(bar);
    }

    /// Record the water salinity.
    pub fn assign_salinity(&mut self, salinity: Salinity) {
        self.salinity = Some(salinity);
    }

    /// Record the activity classification.
    pub fn assign_divemode(&mut self, mode: DiveMode) {
        self.divemode = Some(mode);
    }

    /// Record the number of gas mixes.
    pub fn assign_gasmix_count(&mut self, count: u32) {
        self.gasmix_count = Some(count);
    }

    /// Record one gas mix at an index.
    ///
    /// Entries must be written in index order; an index beyond the next free
    /// slot, or at or beyond [`MAX_GASES`], fails with
    /// [`Error::InvalidArguments`].
    pub fn assign_gasmix(&mut self, index: usize, mix: GasMix) -> Result<(), Error> {
        assign_entry(&mut self.gasmixes, index, mix)
    }

    /// Record the number of tanks.
    pub fn assign_tank_count(&mut self, count: u32) {
        self.tank_count = Some(count);
    }

    /// Record one tank at an index, under the same rules as
    /// [`assign_gasmix`](Self::assign_gasmix).
    pub fn assign_tank(&mut self, index: usize, tank: Tank) -> Result<(), Error> {
        assign_entry(&mut self.tanks, index, tank)
    }

    /// Append a free-text annotation.
    ///
    /// Fails with [`Error::InvalidArguments`] once [`MAX_STRINGS`] entries
    /// have been added.
    pub fn add_string(&mut self, desc: impl Into<String>, value: impl Into<String>) -> Result<(), Error> {
        if self.strings.len() == MAX_STRINGS {
            return Err(Error::InvalidArguments);
        }
        self.strings.push(Annotation {
            desc: desc.into(),
            value: value.into(),
        });
        Ok(())
    }

    /// Look up one fact.
    ///
    /// Fails with [`Error::Unsupported`] if the fact was never assigned, and
    /// with [`Error::InvalidArguments`] if `index` is at or beyond the
    /// declared count of an array-typed fact. `index` is ignored for scalar
    /// facts.
    pub fn get(&self, ty: FieldType, index: u32) -> Result<FieldValue, Error> {
        match ty {
            FieldType::DiveTime => scalar(self.divetime, FieldValue::DiveTime),
            FieldType::MaxDepth => scalar(self.maxdepth, FieldValue::Depth),
            FieldType::AvgDepth => scalar(self.avgdepth, FieldValue::Depth),
            FieldType::Atmospheric => scalar(self.atmospheric, FieldValue::Pressure),
            FieldType::Salinity => scalar(self.salinity, FieldValue::Salinity),
            FieldType::DiveMode => scalar(self.divemode, FieldValue::Mode),
            FieldType::GasMixCount => scalar(self.gasmix_count, FieldValue::Count),
            FieldType::TankCount => scalar(self.tank_count, FieldValue::Count),
            FieldType::GasMix => {
                let count = self.gasmix_count.ok_or(Error::Unsupported)?;
                if index >= count {
                    return Err(Error::InvalidArguments);
                }
                scalar(self.gasmixes.get(index as usize).copied(), FieldValue::GasMix)
            }
            FieldType::Tank => {
                let count = self.tank_count.ok_or(Error::Unsupported)?;
                if index >= count {
                    return Err(Error::InvalidArguments);
                }
                scalar(self.tanks.get(index as usize).copied(), FieldValue::Tank)
            }
            FieldType::String => {
                if index as usize >= MAX_STRINGS {
                    return Err(Error::InvalidArguments);
                }
                scalar(self.strings.get(index as usize).cloned(), FieldValue::Text)
            }
        }
    }
}

fn scalar<T>(slot: Option<T>, wrap: fn(T) -> FieldValue) -> Result<FieldValue, Error> {
    slot.map(wrap).ok_or(Error::Unsupported)
}

fn assign_entry<A: tinyvec::Array>(
    store: &mut ArrayVec<A>,
    index: usize,
    entry: A::Item,
) -> Result<(), Error> {
    if index >= A::CAPACITY || index > store.len() {
        return Err(Error::InvalidArguments);
    }
    if index == store.len() {
        store.push(entry);
    } else {
        store[index] = entry;
    }
    Ok(())
}
