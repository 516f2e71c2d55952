/// (USPS abbreviation, two-digit FIPS code) for a state name.
/// Covers the 50 states plus the District of Columbia; there is no fallback.
fn state_info(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "Alabama" => Some(("AL", "01")),
        "Alaska" => Some(("AK", "02")),
        "Arizona" => Some(("AZ", "04")),
        "Arkansas" => Some(("AR", "05")),
        "California" => Some(("CA", "06")),
        "Colorado" => Some(("CO", "08")),
        "Connecticut" => Some(("CT", "09")),
        "Delaware" => Some(("DE", "10")),
        "District of Columbia" => Some(("DC", "11")),
        "Florida" => Some(("FL", "12")),
        "Georgia" => Some(("GA", "13")),
        "Hawaii" => Some(("HI", "15")),
        "Idaho" => Some(("ID", "16")),
        "Illinois" => Some(("IL", "17")),
        "Indiana" => Some(("IN", "18")),
        "Iowa" => Some(("IA", "19")),
        "Kansas" => Some(("KS", "20")),
        "Kentucky" => Some(("KY", "21")),
        "Louisiana" => Some(("LA", "22")),
        "Maine" => Some(("ME", "23")),
        "Maryland" => Some(("MD", "24")),
        "Massachusetts" => Some(("MA", "25")),
        "Michigan" => Some(("MI", "26")),
        "Minnesota" => Some(("MN", "27")),
        "Mississippi" => Some(("MS", "28")),
        "Missouri" => Some(("MO", "29")),
        "Montana" => Some(("MT", "30")),
        "Nebraska" => Some(("NE", "31")),
        "Nevada" => Some(("NV", "32")),
        "New Hampshire" => Some(("NH", "33")),
        "New Jersey" => Some(("NJ", "34")),
        "New Mexico" => Some(("NM", "35")),
        "New York" => Some(("NY", "36")),
        "North Carolina" => Some(("NC", "37")),
        "North Dakota" => Some(("ND", "38")),
        "Ohio" => Some(("OH", "39")),
        "Oklahoma" => Some(("OK", "40")),
        "Oregon" => Some(("OR", "41")),
        "Pennsylvania" => Some(("PA", "42")),
        "Rhode Island" => Some(("RI", "44")),
        "South Carolina" => Some(("SC", "45")),
        "South Dakota" => Some(("SD", "46")),
        "Tennessee" => Some(("TN", "47")),
        "Texas" => Some(("TX", "48")),
        "Utah" => Some(("UT", "49")),
        "Vermont" => Some(("VT", "50")),
        "Virginia" => Some(("VA", "51")),
        "Washington" => Some(("WA", "53")),
        "West Virginia" => Some(("WV", "54")),
        "Wisconsin" => Some(("WI", "55")),
        "Wyoming" => Some(("WY", "56")),
        _ => None,
    }
}

const STATE_NAMES: [&str; 51] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "District of Columbia", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois",
    "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts",
    "Michigan", "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota",
    "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

/// Trim a state name and collapse internal runs of whitespace to a single space.
pub fn normalize_state_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// USPS abbreviation for a (whitespace-normalized) state name, e.g. "New York" -> "NY".
pub fn state_name_to_abbr(name: &str) -> Option<&'static str> {
    state_info(name).map(|(abbr, _)| abbr)
}

/// Full state name for a USPS abbreviation (case-insensitive).
pub fn state_abbr_to_name(abbr: &str) -> Option<&'static str> {
    let code = abbr.trim().to_ascii_uppercase();
    STATE_NAMES.iter().copied()
        .find(|name| state_name_to_abbr(name) == Some(code.as_str()))
}

/// Two-digit FIPS code for a USPS abbreviation (case-insensitive).
pub fn state_abbr_to_fips(abbr: &str) -> Option<&'static str> {
    state_abbr_to_name(abbr)
        .and_then(state_info)
        .map(|(_, fips)| fips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_states_and_dc() {
        assert_eq!(STATE_NAMES.len(), 51);
        for name in STATE_NAMES {
            assert!(state_name_to_abbr(name).is_some(), "missing {name}");
        }
        assert_eq!(state_name_to_abbr("District of Columbia"), Some("DC"));
    }

    #[test]
    fn unmapped_names_have_no_abbreviation() {
        assert_eq!(state_name_to_abbr("Puerto Rico"), None);
        assert_eq!(state_name_to_abbr("new york"), None);
        assert_eq!(state_name_to_abbr(""), None);
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(normalize_state_name("  New   York "), "New York");
        assert_eq!(state_name_to_abbr(&normalize_state_name("North\tCarolina")), Some("NC"));
    }

    #[test]
    fn reverse_lookups() {
        assert_eq!(state_abbr_to_name("ne"), Some("Nebraska"));
        assert_eq!(state_abbr_to_fips("NE"), Some("31"));
        assert_eq!(state_abbr_to_fips("DC"), Some("11"));
        assert_eq!(state_abbr_to_fips("PR"), None);
    }
}
