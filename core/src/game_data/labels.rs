//! Compact display labels for the countdown table.
//!
//! Long location and boss names are shortened so the table fits narrow
//! display surfaces. Unknown keys fall back to a fixed-length prefix.

use phf::phf_map;

/// Maximum width of a location label
const LOCATION_PREFIX: usize = 10;

/// Maximum width of a boss name label
const NAME_PREFIX: usize = 8;

/// Location name → short label
static LOCATION_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "Corrupted Basin" => "CrptBasin",
    "Crescent Lake" => "CrescentLk",
    "Ulan Canyon" => "UlanCany",
    "Protector's Ruins" => "ProtRuins",
    "Lower Tomb of Tyriosa 1F" => "Tyriosa1F",
    "Secret Laboratory" => "SecretLab",
    "Desert of the Screaming" => "ScreamDst",
    "Twilight Hill" => "TwilightHl",
    "Lower Tomb of Tyriosa 2F" => "Tyriosa2F",
    "Land of Glory" => "GloryLand",
    "Battlefield of Templar" => "TemplarBF",
    "Lower Tomb of Tyriosa 3F" => "Tyriosa3F",
    "Plateau of Revolution" => "RevolPlat",
    "Ruins of the War" => "WarRuins",
    "Garbana Underground Waterway 1F" => "Garbana1F",
    "Deadman's Land District 1" => "Deadman1",
    "Deadman's Land District 2" => "Deadman2",
    "Deadman's Land District 3" => "Deadman3",
    "Garbana Underground Waterway 2F" => "Garbana2F",
};

/// Boss names whose compact form is not just a prefix truncation
static COMPACT_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Clementis" => "Clemnts",
    "Lady Dalia" => "LadyDalia",
};

/// Short label for a location, truncated for unknown entries
pub fn short_location(location: &str) -> &str {
    LOCATION_LABELS
        .get(location)
        .copied()
        .unwrap_or_else(|| prefix(location, LOCATION_PREFIX))
}

/// Compact form of a boss name
pub fn compact_name(name: &str) -> &str {
    COMPACT_NAMES
        .get(name)
        .copied()
        .unwrap_or_else(|| prefix(name, NAME_PREFIX))
}

/// First `max` characters of `s`, respecting char boundaries
fn prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_location_uses_short_label() {
        assert_eq!(short_location("Corrupted Basin"), "CrptBasin");
        assert_eq!(short_location("Garbana Underground Waterway 2F"), "Garbana2F");
    }

    #[test]
    fn unknown_location_truncates() {
        assert_eq!(short_location("Some Unmapped Region"), "Some Unmap");
        assert_eq!(short_location("Short"), "Short");
    }

    #[test]
    fn compact_names_cover_the_long_ones() {
        assert_eq!(compact_name("Lady Dalia"), "LadyDalia");
        assert_eq!(compact_name("Clementis"), "Clemnts");
        assert_eq!(compact_name("Venatus"), "Venatus");
        assert_eq!(compact_name("Unknownboss"), "Unknownb");
    }
}
