//! End-to-end scenarios against the reference facility.

use smartpark_core::{Error, Facility, FacilityConfig, SlotId};
use smartpark_pricing::{FixedClock, TimeBand};

fn reference(hour: u32) -> Facility {
    Facility::from_config(&FacilityConfig::default())
        .unwrap()
        .with_clock(FixedClock(hour))
}

fn id(raw: usize) -> SlotId {
    SlotId::new(raw)
}

#[test]
fn nearest_skips_occupied_graph_neighbor() {
    let mut facility = reference(12);
    let rates: Vec<f64> = facility.slots().iter().map(|s| s.base_rate()).collect();
    assert_eq!(
        rates,
        vec![100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0]
    );

    facility.park(id(3), 1.0).unwrap();
    let nearest = facility.find_nearest(id(1)).unwrap();
    assert_ne!(nearest.slot, id(3));
    assert!(facility.is_available(nearest.slot).unwrap());

    // With the origin taken too, the next slot out (4, at 1.5) wins.
    facility.park(id(1), 1.0).unwrap();
    let nearest = facility.find_nearest(id(1)).unwrap();
    assert_eq!((nearest.slot, nearest.distance), (id(4), 1.5));

    // Taking 4 moves the recommendation along its distance tier.
    facility.park(id(4), 1.0).unwrap();
    assert_eq!(facility.find_nearest(id(1)).unwrap().slot, id(7));
}

#[test]
fn nearest_moves_along_as_slots_fill() {
    let mut facility = reference(12);

    // Slot 2 sees 3, 6, 9 at 1.5 and 5, 8 at 3.0.
    let mut order = Vec::new();
    while let Ok(allocation) = facility.find_nearest(id(2)) {
        order.push((allocation.slot.value(), allocation.distance));
        facility.park(allocation.slot, 1.0).unwrap();
    }
    assert_eq!(
        order,
        vec![(2, 0.0), (3, 1.5), (6, 1.5), (9, 1.5), (5, 3.0), (8, 3.0)]
    );
    assert!(matches!(facility.find_nearest(id(2)), Err(Error::NotFound(_))));

    // Freeing a far slot brings it back.
    facility.release(id(8)).unwrap();
    assert_eq!(facility.find_nearest(id(2)).unwrap().slot, id(8));
}

#[test]
fn pricing_table() {
    let cases = [
        // (hour, duration, slot, total, multiplier)
        (3, 1.0, 1, 100.0, 1.0),
        (10, 1.0, 1, 100.0, 1.0),
        (10, 1.5, 1, 225.0, 1.5),
        (20, 2.0, 1, 240.0, 1.2),
        (2, 3.0, 1, 300.0, 1.0),
        (18, 2.5, 5, 225.0, 1.5),
    ];

    for (hour, duration, slot, total, multiplier) in cases {
        let mut facility = reference(hour);
        let receipt = facility.park(id(slot), duration).unwrap();
        assert_eq!(
            receipt.quote.total, total,
            "slot {} for {}h at {}:00",
            slot, duration, hour
        );
        assert_eq!(receipt.quote.multiplier, multiplier);
    }
}

#[test]
fn every_operation_rejects_out_of_range_ids() {
    let mut facility = reference(12);
    for raw in [0, 11, 99] {
        let slot = id(raw);
        assert!(matches!(facility.is_available(slot), Err(Error::InvalidSlot(_))));
        assert!(matches!(facility.rate(slot), Err(Error::InvalidSlot(_))));
        assert!(matches!(facility.park(slot, 1.0), Err(Error::InvalidSlot(_))));
        assert!(matches!(facility.release(slot), Err(Error::InvalidSlot(_))));
        assert!(matches!(facility.find_nearest(slot), Err(Error::InvalidSlot(_))));
    }
    assert_eq!(facility.registry().occupied_count(), 0);
}

#[test]
fn band_banner_tracks_clock() {
    assert_eq!(reference(8).time_band(), TimeBand::Peak);
    assert_eq!(reference(19).time_band(), TimeBand::Evening);
    assert_eq!(reference(23).time_band(), TimeBand::OffPeak);
}

#[test]
fn oversized_facility_keeps_non_positive_rates() {
    let config = FacilityConfig {
        slot_count: 12,
        ..FacilityConfig::default()
    };
    let mut facility = Facility::from_config(&config)
        .unwrap()
        .with_clock(FixedClock(10));
    assert_eq!(facility.registry().non_positive_rates(), vec![id(11), id(12)]);

    let receipt = facility.park(id(12), 2.0).unwrap();
    assert!(receipt.quote.total < 0.0);
}
