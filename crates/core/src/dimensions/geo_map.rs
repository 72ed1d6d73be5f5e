//! Country code to reporting region mappings.
//!
//! Attribution partners report geography as ISO 3166 alpha-2 country codes;
//! the dashboard dimensions are coarse regions. This module holds the static
//! lookup used by every adapter.

use std::collections::HashMap;

use super::dimensions_model::Region;

/// Country code to region mapping database.
pub struct GeoMap {
    regions: HashMap<&'static str, Region>,
}

impl Default for GeoMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoMap {
    /// Create a new GeoMap with the default country coverage.
    pub fn new() -> Self {
        let mut map = Self {
            regions: HashMap::new(),
        };
        map.load_defaults();
        map
    }

    /// Load all default country mappings.
    fn load_defaults(&mut self) {
        // ===== North America =====
        self.add("US", Region::NorthAmerica);
        self.add("CA", Region::NorthAmerica);
        self.add("MX", Region::NorthAmerica);

        // ===== South America =====
        self.add("BR", Region::SouthAmerica);
        self.add("AR", Region::SouthAmerica);
        self.add("CO", Region::SouthAmerica);

        // ===== Europe =====
        self.add("GB", Region::Europe);
        self.add("DE", Region::Europe);
        self.add("FR", Region::Europe);
        self.add("IT", Region::Europe);
        self.add("ES", Region::Europe);

        // ===== Asia Pacific =====
        self.add("JP", Region::AsiaPacific);
        self.add("CN", Region::AsiaPacific);
        self.add("IN", Region::AsiaPacific);
        self.add("AU", Region::AsiaPacific);
        self.add("KR", Region::AsiaPacific);

        // ===== Middle East =====
        self.add("SA", Region::MiddleEast);
        self.add("AE", Region::MiddleEast);
        self.add("IL", Region::MiddleEast);

        // ===== Africa =====
        self.add("ZA", Region::Africa);
        self.add("EG", Region::Africa);
        self.add("NG", Region::Africa);
    }

    fn add(&mut self, code: &'static str, region: Region) {
        self.regions.insert(code, region);
    }

    /// Resolve a country code to its region. Unknown codes map to
    /// [`Region::Other`].
    pub fn resolve(&self, code: &str) -> Region {
        self.regions
            .get(code.trim().to_uppercase().as_str())
            .copied()
            .unwrap_or(Region::Other)
    }

    pub fn has_country(&self, code: &str) -> bool {
        self.regions
            .contains_key(code.trim().to_uppercase().as_str())
    }
}

lazy_static::lazy_static! {
    static ref GEO_MAP: GeoMap = GeoMap::new();
}

/// Resolve a country code against the default mapping.
pub fn region_for_country(code: &str) -> Region {
    GEO_MAP.resolve(code)
}
