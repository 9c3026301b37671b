//! Shared types describing the Polish administrative hierarchy as it appears
//! in registry reports and reference tables.
//!
//! The hierarchy has four levels: region (województwo), county (powiat),
//! municipality (gmina) and locality (miejscowość). A report record carries
//! each level as an optional value ([`AdminUnits`]); reference tables carry
//! them as plain strings ([`ReferenceRow`], [`AdminTriple`]), where an empty
//! string means the cell was blank.
//!
//! ```rust
//! use adresy_types::{AdminField, AdminUnits};
//!
//! let mut units = AdminUnits::default();
//! *units.slot_mut(AdminField::Locality) = Some("Kraków".into());
//! assert_eq!(units.get(AdminField::Locality), Some("Kraków"));
//! assert_eq!(units.known_count(), 1);
//! ```

use std::fmt;

pub mod columns;

/// One level of the administrative hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AdminField {
    Region,
    County,
    Municipality,
    Locality,
}

impl AdminField {
    /// All levels, from the widest to the narrowest.
    pub const ALL: [AdminField; 4] = [
        AdminField::Region,
        AdminField::County,
        AdminField::Municipality,
        AdminField::Locality,
    ];

    /// Report column holding this level.
    pub fn column(self) -> &'static str {
        match self {
            AdminField::Region => columns::REGION,
            AdminField::County => columns::COUNTY,
            AdminField::Municipality => columns::MUNICIPALITY,
            AdminField::Locality => columns::LOCALITY,
        }
    }
}

impl fmt::Display for AdminField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdminField::Region => "region",
            AdminField::County => "county",
            AdminField::Municipality => "municipality",
            AdminField::Locality => "locality",
        })
    }
}

/// Administrative fields of a single report record. `None` is a logically
/// absent value, including cells that held a missing-value token.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminUnits {
    pub region: Option<String>,
    pub county: Option<String>,
    pub municipality: Option<String>,
    pub locality: Option<String>,
}

impl AdminUnits {
    pub fn get(&self, field: AdminField) -> Option<&str> {
        match field {
            AdminField::Region => self.region.as_deref(),
            AdminField::County => self.county.as_deref(),
            AdminField::Municipality => self.municipality.as_deref(),
            AdminField::Locality => self.locality.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, field: AdminField) -> &mut Option<String> {
        match field {
            AdminField::Region => &mut self.region,
            AdminField::County => &mut self.county,
            AdminField::Municipality => &mut self.municipality,
            AdminField::Locality => &mut self.locality,
        }
    }

    /// Number of levels holding a value.
    pub fn known_count(&self) -> usize {
        AdminField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.known_count() == AdminField::ALL.len()
    }
}

/// Row of the base geography table, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReferenceRow {
    pub region: String,
    pub county: String,
    pub municipality: String,
    pub locality: String,
    pub district: String,
}

impl ReferenceRow {
    /// The `(region, county, municipality)` part of the row.
    pub fn triple(&self) -> AdminTriple {
        AdminTriple {
            region: self.region.clone(),
            county: self.county.clone(),
            municipality: self.municipality.clone(),
        }
    }
}

/// Region, county and municipality a locality belongs to. Blank cells stay
/// as empty strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdminTriple {
    pub region: String,
    pub county: String,
    pub municipality: String,
}

impl AdminTriple {
    /// Value for one of the three levels; `None` for blank cells and for
    /// [`AdminField::Locality`], which a triple does not carry.
    pub fn get(&self, field: AdminField) -> Option<&str> {
        let value = match field {
            AdminField::Region => &self.region,
            AdminField::County => &self.county,
            AdminField::Municipality => &self.municipality,
            AdminField::Locality => return None,
        };
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Locality entry scoped to one registry court, with its canonical spelling.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CourtLocality {
    pub units: AdminTriple,
    pub locality: String,
}
