/// Free-text country names the carrier does not accept, mapped to ISO codes.
const COUNTRY_ALIASES: &[(&str, &str)] = &[("usa", "US"), ("united states", "US")];

/// Countries for which the carrier accepts a state/province field.
const STATE_COUNTRIES: &[&str] = &["US", "CA", "IE"];

/// Maps a free-text country name to its ISO code.
///
/// Lookup is case-insensitive. Anything not in the alias table is returned
/// unchanged and assumed to already be a valid code.
pub fn normalize_country(country: &str) -> String {
    let lowered = country.to_lowercase();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| country.to_string())
}

/// Whether a state/province code may be sent for this (normalized) country.
pub fn state_applies(country_code: &str) -> bool {
    STATE_COUNTRIES.contains(&country_code)
}
