use fathom::Error;
use fathom::field::{
    DiveMode, FieldCache, FieldType, FieldValue, GasMix, MAX_GASES, MAX_STRINGS, Salinity, Tank,
    WaterKind,
};

#[test]
fn unset_facts_are_unsupported() {
    let cache = FieldCache::default();

    for ty in FieldType::ALL {
        assert_eq!(cache.get(ty, 0), Err(Error::Unsupported));
    }
}

#[test]
fn scalar_roundtrip() {
    let mut cache = FieldCache::default();

    cache.assign_divetime(600);
    cache.assign_maxdepth(19.5);
    cache.assign_avgdepth(11.25);
    cache.assign_atmospheric(1.013);
    cache.assign_divemode(DiveMode::Gauge);
    cache.assign_salinity(Salinity {
        kind: WaterKind::Salt,
        density: 1.024,
    });

    assert_eq!(
        cache.get(FieldType::DiveTime, 0),
        Ok(FieldValue::DiveTime(600))
    );
    assert_eq!(cache.get(FieldType::MaxDepth, 0), Ok(FieldValue::Depth(19.5)));
    assert_eq!(
        cache.get(FieldType::AvgDepth, 0),
        Ok(FieldValue::Depth(11.25))
    );
    assert_eq!(
        cache.get(FieldType::Atmospheric, 0),
        Ok(FieldValue::Pressure(1.013))
    );
    assert_eq!(
        cache.get(FieldType::DiveMode, 0),
        Ok(FieldValue::Mode(DiveMode::Gauge))
    );
    assert_eq!(
        cache.get(FieldType::Salinity, 0),
        Ok(FieldValue::Salinity(Salinity {
            kind: WaterKind::Salt,
            density: 1.024,
        }))
    );
}

#[test]
fn indexed_facts_respect_declared_count() {
    let mut cache = FieldCache::default();

    let air = GasMix {
        oxygen: 0.21,
        helium: 0.0,
    };
    let nitrox = GasMix {
        oxygen: 0.32,
        helium: 0.0,
    };

    cache.assign_gasmix(0, air).unwrap();
    cache.assign_gasmix(1, nitrox).unwrap();
    cache.assign_gasmix_count(2);

    assert_eq!(cache.get(FieldType::GasMixCount, 0), Ok(FieldValue::Count(2)));
    assert_eq!(cache.get(FieldType::GasMix, 0), Ok(FieldValue::GasMix(air)));
    assert_eq!(
        cache.get(FieldType::GasMix, 1),
        Ok(FieldValue::GasMix(nitrox))
    );
    assert_eq!(
        cache.get(FieldType::GasMix, 2),
        Err(Error::InvalidArguments)
    );
}

#[test]
fn indexed_facts_without_a_count_are_unsupported() {
    let mut cache = FieldCache::default();

    cache
        .assign_gasmix(0, GasMix {
            oxygen: 0.21,
            helium: 0.0,
        })
        .unwrap();

    assert_eq!(cache.get(FieldType::GasMix, 0), Err(Error::Unsupported));
}

#[test]
fn indexed_assignment_rejects_holes_and_overflow() {
    let mut cache = FieldCache::default();

    let mix = GasMix::default();

    // Entries must be written in index order.
    assert_eq!(cache.assign_gasmix(1, mix), Err(Error::InvalidArguments));
    assert_eq!(cache.assign_gasmix(MAX_GASES, mix), Err(Error::InvalidArguments));

    // Rewriting an existing entry is allowed.
    cache.assign_gasmix(0, mix).unwrap();
    cache
        .assign_gasmix(0, GasMix {
            oxygen: 0.36,
            helium: 0.0,
        })
        .unwrap();
    cache.assign_gasmix_count(1);

    assert_eq!(
        cache.get(FieldType::GasMix, 0),
        Ok(FieldValue::GasMix(GasMix {
            oxygen: 0.36,
            helium: 0.0,
        }))
    );
}

#[test]
fn tanks_roundtrip() {
    let mut cache = FieldCache::default();

    let tank = Tank {
        gasmix: 0,
        volume: 12.0,
        work_pressure: 232.0,
        begin_pressure: 210.0,
        end_pressure: 60.0,
    };

    cache.assign_tank(0, tank).unwrap();
    cache.assign_tank_count(1);

    assert_eq!(cache.get(FieldType::TankCount, 0), Ok(FieldValue::Count(1)));
    assert_eq!(cache.get(FieldType::Tank, 0), Ok(FieldValue::Tank(tank)));
    assert_eq!(cache.get(FieldType::Tank, 1), Err(Error::InvalidArguments));
}

#[test]
fn strings_are_indexed_in_insertion_order() {
    let mut cache = FieldCache::default();

    cache.add_string("Serial", "12345").unwrap();
    cache.add_string("FW Version", "1.2.0").unwrap();

    let FieldValue::Text(first) = cache.get(FieldType::String, 0).unwrap() else {
        panic!("expected a text fact");
    };
    assert_eq!(first.desc, "Serial");
    assert_eq!(first.value, "12345");

    assert_eq!(cache.get(FieldType::String, 2), Err(Error::Unsupported));
    assert_eq!(
        cache.get(FieldType::String, MAX_STRINGS as u32),
        Err(Error::InvalidArguments)
    );
}

#[test]
fn strings_are_bounded() {
    let mut cache = FieldCache::default();

    for i in 0..MAX_STRINGS {
        cache.add_string("Note", i.to_string()).unwrap();
    }
    assert_eq!(
        cache.add_string("Note", "overflow"),
        Err(Error::InvalidArguments)
    );
}

#[test]
fn clear_resets_every_fact() {
    let mut cache = FieldCache::default();

    cache.assign_divetime(600);
    cache.assign_divemode(DiveMode::Freedive);
    cache.assign_gasmix(0, GasMix::default()).unwrap();
    cache.assign_gasmix_count(1);
    cache.add_string("Serial", "12345").unwrap();

    cache.clear();

    for ty in FieldType::ALL {
        assert_eq!(cache.get(ty, 0), Err(Error::Unsupported));
    }
}
