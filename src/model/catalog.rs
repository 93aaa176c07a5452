/// One fixed catalog entry: a canton the player can mark done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canton {
    /// Two-letter canton code, unique across the catalog
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
}

/// The 26 cantons, in display order. This order is also the export order.
pub static CANTONS: [Canton; 26] = [
    Canton { code: "AG", name: "Aargau" },
    Canton { code: "AI", name: "Appenzell Innerrhoden" },
    Canton { code: "AR", name: "Appenzell Ausserrhoden" },
    Canton { code: "BE", name: "Bern" },
    Canton { code: "BL", name: "Basel-Landschaft" },
    Canton { code: "BS", name: "Basel-Stadt" },
    Canton { code: "FR", name: "Freiburg" },
    Canton { code: "GE", name: "Genf" },
    Canton { code: "GL", name: "Glarus" },
    Canton { code: "GR", name: "Graubuenden" },
    Canton { code: "JU", name: "Jura" },
    Canton { code: "LU", name: "Luzern" },
    Canton { code: "NE", name: "Neuenburg" },
    Canton { code: "NW", name: "Nidwalden" },
    Canton { code: "OW", name: "Obwalden" },
    Canton { code: "SG", name: "St. Gallen" },
    Canton { code: "SH", name: "Schaffhausen" },
    Canton { code: "SO", name: "Solothurn" },
    Canton { code: "SZ", name: "Schwyz" },
    Canton { code: "TG", name: "Thurgau" },
    Canton { code: "TI", name: "Tessin" },
    Canton { code: "UR", name: "Uri" },
    Canton { code: "VD", name: "Waadt" },
    Canton { code: "VS", name: "Wallis" },
    Canton { code: "ZG", name: "Zug" },
    Canton { code: "ZH", name: "Zuerich" },
];

/// Total number of cantons (the denominator of every statistic).
pub const TOTAL: usize = 26;

/// Look up a canton by code. Codes are matched case-insensitively
/// so the CLI accepts `zh` as well as `ZH`.
pub fn find(code: &str) -> Option<&'static Canton> {
    CANTONS.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Whether a code names a canton in the catalog (exact match, as stored).
pub fn is_valid_code(code: &str) -> bool {
    CANTONS.iter().any(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_26_unique_codes() {
        assert_eq!(CANTONS.len(), TOTAL);
        let codes: HashSet<&str> = CANTONS.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), TOTAL);
    }

    #[test]
    fn all_codes_are_two_uppercase_letters() {
        for canton in &CANTONS {
            assert_eq!(canton.code.len(), 2, "bad code: {}", canton.code);
            assert!(canton.code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("zh").map(|c| c.name), Some("Zuerich"));
        assert_eq!(find("ZH").map(|c| c.name), Some("Zuerich"));
        assert!(find("XX").is_none());
    }

    #[test]
    fn is_valid_code_is_exact() {
        assert!(is_valid_code("AG"));
        assert!(!is_valid_code("ag"));
        assert!(!is_valid_code(""));
    }
}
