//! Great-circle distance and nearest reference location lookup.

use crate::error::EngineError;
use crate::model::{Coordinates, NearestLocation, ReferenceLocation};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Find the catalog entry closest to `coords`. Ties keep the earlier entry.
pub fn nearest(
    coords: Coordinates,
    catalog: &[ReferenceLocation],
) -> Result<NearestLocation<'_>, EngineError> {
    let mut best: Option<NearestLocation<'_>> = None;

    for location in catalog {
        let distance_km = haversine_km(coords, location.coordinates());
        if best
            .as_ref()
            .map_or(true, |b| distance_km < b.distance_km)
        {
            best = Some(NearestLocation {
                location,
                distance_km,
            });
        }
    }

    best.ok_or(EngineError::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_locations;
    use approx::assert_abs_diff_eq;

    fn at(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = at(23.8103, 90.4125);
        assert_abs_diff_eq!(haversine_km(p, p), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn haversine_is_symmetric() {
        let dhaka = at(23.8103, 90.4125);
        let sylhet = at(24.8949, 91.8687);
        assert_abs_diff_eq!(
            haversine_km(dhaka, sylhet),
            haversine_km(sylhet, dhaka),
            epsilon = 1e-9
        );
    }

    #[test]
    fn haversine_known_distance() {
        // Dhaka to Chittagong is roughly 215 km as the crow flies
        let d = haversine_km(at(23.8103, 90.4125), at(22.3569, 91.7832));
        assert!((205.0..225.0).contains(&d), "got {d}");
    }

    #[test]
    fn haversine_quarter_meridian() {
        let d = haversine_km(at(0.0, 0.0), at(90.0, 0.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn nearest_exact_match() {
        let catalog = default_locations();
        for entry in &catalog {
            let found = nearest(entry.coordinates(), &catalog).unwrap();
            assert_eq!(found.location.name, entry.name);
            assert_abs_diff_eq!(found.distance_km, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn nearest_picks_closest() {
        let catalog = default_locations();
        // Gazipur, just north of Dhaka
        let found = nearest(at(23.9999, 90.4203), &catalog).unwrap();
        assert_eq!(found.location.name, "Dhaka");
    }

    #[test]
    fn nearest_tie_keeps_first_entry() {
        let catalog = vec![
            ReferenceLocation {
                name: "East".into(),
                latitude: 0.0,
                longitude: 1.0,
            },
            ReferenceLocation {
                name: "West".into(),
                latitude: 0.0,
                longitude: -1.0,
            },
        ];
        let found = nearest(at(0.0, 0.0), &catalog).unwrap();
        assert_eq!(found.location.name, "East");
    }

    #[test]
    fn nearest_empty_catalog_fails() {
        let err = nearest(at(0.0, 0.0), &[]).unwrap_err();
        assert_eq!(err, EngineError::EmptyCatalog);
    }
}
