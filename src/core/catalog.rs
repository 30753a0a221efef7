// Process-wide read-only lookup tables.

pub const SERVICES: &[(&str, &str)] = &[
    ("03", "UPS Ground"),
    ("11", "UPS Standard"),
    ("01", "UPS Next Day"),
    ("14", "UPS Next Day AM"),
    ("13", "UPS Next Day Air Saver"),
    ("02", "UPS 2nd Day"),
    ("59", "UPS 2nd Day AM"),
    ("12", "UPS 3-day Select"),
    ("65", "UPS Saver"),
    ("07", "UPS Worldwide Express"),
    ("08", "UPS Worldwide Expedited"),
    ("54", "UPS Worldwide Express Plus"),
];

pub const PACKAGING_TYPES: &[(&str, &str)] = &[
    ("02", "Custom Packaging"),
    ("01", "UPS Letter"),
    ("03", "Tube"),
    ("04", "PAK"),
    ("21", "UPS Express Box"),
    ("2a", "Small Express Box"),
    ("2b", "Medium Express Box"),
    ("2c", "Large Express Box"),
];

/// Worldwide Expedited.
pub const DEFAULT_SERVICE_CODE: &str = "08";

/// Custom packaging.
pub const DEFAULT_PACKAGING_TYPE: &str = "02";

pub fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn service_name(code: &str) -> Option<&'static str> {
    lookup(SERVICES, code)
}

pub fn packaging_name(code: &str) -> Option<&'static str> {
    lookup(PACKAGING_TYPES, code)
}
