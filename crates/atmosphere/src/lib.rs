//! Air density from a coarse, stepped approximation of the standard atmosphere.
//!
//! Density is constant within each altitude band and jumps at the band
//! ceilings; nothing is interpolated. Above the last band the air is treated
//! as vacuum.

/// One altitude band of the density table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereBand {
    /// Upper bound of the band (m), inclusive.
    pub ceiling_m: f64,
    pub density_kg_m3: f64,
}

/// Bands ordered by ceiling. An altitude belongs to the first band whose
/// ceiling it does not exceed.
pub const BANDS: [AtmosphereBand; 6] = [
    AtmosphereBand {
        ceiling_m: 11_000.0,
        density_kg_m3: 1.225,
    },
    AtmosphereBand {
        ceiling_m: 20_000.0,
        density_kg_m3: 0.3639,
    },
    AtmosphereBand {
        ceiling_m: 32_000.0,
        density_kg_m3: 0.0880,
    },
    AtmosphereBand {
        ceiling_m: 47_000.0,
        density_kg_m3: 0.00132,
    },
    AtmosphereBand {
        ceiling_m: 51_000.0,
        density_kg_m3: 0.0014,
    },
    AtmosphereBand {
        ceiling_m: 71_000.0,
        density_kg_m3: 0.0009,
    },
];

/// Density above the highest band (kg/m³).
pub const VACUUM_DENSITY_KG_M3: f64 = 0.0;

/// Band containing `altitude_m`, or `None` above the table.
pub fn band_for(altitude_m: f64) -> Option<&'static AtmosphereBand> {
    BANDS.iter().find(|band| altitude_m <= band.ceiling_m)
}

/// Air density (kg/m³) at `altitude_m` metres.
pub fn air_density(altitude_m: f64) -> f64 {
    band_for(altitude_m)
        .map(|band| band.density_kg_m3)
        .unwrap_or(VACUUM_DENSITY_KG_M3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_ceilings_are_inclusive() {
        assert_eq!(air_density(11_000.0), 1.225);
        assert_eq!(air_density(11_000.001), 0.3639);
        assert_eq!(air_density(20_000.0), 0.3639);
        assert_eq!(air_density(32_000.0), 0.0880);
        assert_eq!(air_density(47_000.0), 0.00132);
        assert_eq!(air_density(51_000.0), 0.0014);
        assert_eq!(air_density(71_000.0), 0.0009);
        assert_eq!(air_density(71_000.5), 0.0);
    }

    #[test]
    fn low_altitudes_share_sea_level_density() {
        for altitude in [-50.0, 0.0, 1.0, 5_000.0, 10_668.0] {
            assert_eq!(air_density(altitude), 1.225, "altitude {altitude}");
        }
    }

    #[test]
    fn ceilings_increase_monotonically() {
        assert!(BANDS.windows(2).all(|w| w[0].ceiling_m < w[1].ceiling_m));
        assert!(band_for(1.0e6).is_none());
    }
}
