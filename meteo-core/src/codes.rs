//! WMO weather code descriptions.
//!
//! Table after <https://gist.github.com/stellasphere/9490c195ed2b53c707087c8c2db4ec0c>.

/// Description attached to a single weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeDescription {
    /// Same text by day and by night.
    Uniform(&'static str),
    /// Separate texts for daytime and nighttime.
    DayNight {
        day: &'static str,
        night: &'static str,
    },
}

impl CodeDescription {
    pub fn resolve(self, is_day: bool) -> &'static str {
        match self {
            CodeDescription::Uniform(text) => text,
            CodeDescription::DayNight { day, .. } if is_day => day,
            CodeDescription::DayNight { night, .. } => night,
        }
    }
}

/// Returned for codes that have no entry in the table.
pub const UNKNOWN: &str = "Unknown";

use CodeDescription::{DayNight, Uniform};

// Sorted by code.
static WMO_CODES: &[(i64, CodeDescription)] = &[
    (0, DayNight { day: "Sunny", night: "Clear" }),
    (1, DayNight { day: "Mainly Sunny", night: "Mainly Clear" }),
    (2, Uniform("Partly Cloudy")),
    (3, Uniform("Cloudy")),
    (45, Uniform("Foggy")),
    (48, Uniform("Rime Fog")),
    (51, Uniform("Light Drizzle")),
    (53, Uniform("Drizzle")),
    (55, Uniform("Heavy Drizzle")),
    (56, Uniform("Light Freezing Drizzle")),
    (57, Uniform("Freezing Drizzle")),
    (61, Uniform("Light Rain")),
    (63, Uniform("Rain")),
    (65, Uniform("Heavy Rain")),
    (66, Uniform("Light Freezing Rain")),
    (67, Uniform("Freezing Rain")),
    (71, Uniform("Light Snow")),
    (73, Uniform("Snow")),
    (75, Uniform("Heavy Snow")),
    (77, Uniform("Snow Grains")),
    (80, Uniform("Light Showers")),
    (81, Uniform("Showers")),
    (82, Uniform("Heavy Showers")),
    (85, Uniform("Light Snow Showers")),
    (86, Uniform("Snow Showers")),
    (95, Uniform("Thunderstorm")),
    (96, Uniform("Light Thunderstorms with Hail")),
    (99, Uniform("Thunderstorm with Hail")),
];

/// Look up the table entry for `code`, if any.
pub fn lookup(code: i64) -> Option<CodeDescription> {
    WMO_CODES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| WMO_CODES[idx].1)
}

/// Human description of `code`, picking the day or night text where the code has both.
pub fn describe(code: i64, is_day: bool) -> &'static str {
    lookup(code).map_or(UNKNOWN, |desc| desc.resolve(is_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(WMO_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn paired_codes_follow_day_flag() {
        assert_eq!(describe(0, true), "Sunny");
        assert_eq!(describe(0, false), "Clear");
        assert_eq!(describe(1, true), "Mainly Sunny");
        assert_eq!(describe(1, false), "Mainly Clear");
    }

    #[test]
    fn uniform_codes_ignore_day_flag() {
        assert_eq!(describe(3, true), "Cloudy");
        assert_eq!(describe(3, false), "Cloudy");
        assert_eq!(describe(61, false), "Light Rain");
        assert_eq!(describe(99, true), "Thunderstorm with Hail");
    }

    #[test]
    fn unknown_codes_degrade_to_sentinel() {
        assert_eq!(describe(999, true), "Unknown");
        assert_eq!(describe(4, false), "Unknown");
        assert_eq!(describe(-1, true), "Unknown");
        assert!(lookup(999).is_none());
    }
}
