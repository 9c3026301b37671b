//! Column names used by registry reports and the reference tables.

/// Report column: region (województwo).
pub const REGION: &str = "Województwo";
/// Report column: county (powiat).
pub const COUNTY: &str = "Powiat";
/// Report column: municipality (gmina).
pub const MUNICIPALITY: &str = "Gmina";
/// Report column: locality (miejscowość).
pub const LOCALITY: &str = "Miejscowość";
/// Report column: land-and-mortgage registry number.
pub const REGISTRY_NUMBER: &str = "Nr KW";
/// Column appended by the preparation pass.
pub const ADDR_HINT: &str = "_addr_hint";

/// Report columns, in priority order, concatenated into the address hint.
pub const HINT_SOURCES: [&str; 7] = [
    "Cały adres (dla lokalu)",
    "Położenie",
    "Ulica(dla lokalu)",
    "Ulica(dla budynku)",
    "Ulica",
    "Dzielnica",
    LOCALITY,
];

/// Hint sources for the completion pass: the prepared hint first, then the
/// raw report columns.
pub const COMPLETION_HINT_SOURCES: [&str; 8] = [
    ADDR_HINT,
    "Cały adres (dla lokalu)",
    "Położenie",
    "Ulica(dla lokalu)",
    "Ulica(dla budynku)",
    "Ulica",
    "Dzielnica",
    LOCALITY,
];

/// Headers of the base geography (TERYT) table.
pub mod teryt {
    pub const REGION: &str = "Wojewodztwo";
    pub const COUNTY: &str = "Powiat";
    pub const MUNICIPALITY: &str = "Gmina";
    pub const LOCALITY: &str = "Miejscowosc";
    pub const DISTRICT: &str = "Dzielnica";
}

/// Headers of the registry-court jurisdiction table.
pub mod courts {
    pub const CODE: &str = "Oznaczenie sądu";
    pub const REGION: &str = "Województwo";
    pub const COUNTY: &str = "Powiat";
    pub const MUNICIPALITY: &str = "Gmina";
    pub const LOCALITY: &str = "Miejscowość";
    pub const DISTRICT: &str = "Dzielnica";
}
