//! Curated airport directory
//!
//! Immutable reference table keyed by 4-letter ICAO code, loaded into the
//! binary at compile time and shared read-only. Most airports in the world
//! are absent from this table; a miss is a normal outcome and callers fall
//! back to a placeholder record rather than treating it as an error.

/// Descriptive metadata for one airport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportInfo {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// (code, name, city, country)
const AIRPORTS: &[(&str, &str, &str, &str)] = &[
    // United States
    ("KJFK", "John F. Kennedy International", "New York", "USA"),
    ("KLAX", "Los Angeles International", "Los Angeles", "USA"),
    ("KORD", "O'Hare International", "Chicago", "USA"),
    ("KATL", "Hartsfield-Jackson Atlanta International", "Atlanta", "USA"),
    ("KDFW", "Dallas/Fort Worth International", "Dallas", "USA"),
    ("KDEN", "Denver International", "Denver", "USA"),
    ("KSFO", "San Francisco International", "San Francisco", "USA"),
    ("KLAS", "Harry Reid International", "Las Vegas", "USA"),
    ("KMIA", "Miami International", "Miami", "USA"),
    ("KSEA", "Seattle-Tacoma International", "Seattle", "USA"),
    ("KBOS", "Boston Logan International", "Boston", "USA"),
    ("KPHL", "Philadelphia International", "Philadelphia", "USA"),
    ("KEWR", "Newark Liberty International", "Newark", "USA"),
    ("KIAD", "Washington Dulles International", "Washington D.C.", "USA"),
    ("KDCA", "Ronald Reagan Washington National", "Washington D.C.", "USA"),
    // Europe
    ("EGLL", "Heathrow", "London", "UK"),
    ("EGKK", "Gatwick", "London", "UK"),
    ("EGLC", "London City", "London", "UK"),
    ("EGSS", "Stansted", "London", "UK"),
    ("LFPG", "Charles de Gaulle", "Paris", "France"),
    ("LFPO", "Orly", "Paris", "France"),
    ("EDDF", "Frankfurt", "Frankfurt", "Germany"),
    ("EDDM", "Munich", "Munich", "Germany"),
    ("EDDB", "Berlin Brandenburg", "Berlin", "Germany"),
    ("EHAM", "Schiphol", "Amsterdam", "Netherlands"),
    ("LEMD", "Adolfo Suárez Madrid-Barajas", "Madrid", "Spain"),
    ("LEBL", "El Prat", "Barcelona", "Spain"),
    ("LIRF", "Fiumicino", "Rome", "Italy"),
    ("LIMC", "Malpensa", "Milan", "Italy"),
    ("LSZH", "Zurich", "Zurich", "Switzerland"),
    ("LSGG", "Geneva", "Geneva", "Switzerland"),
    ("LOWW", "Vienna International", "Vienna", "Austria"),
    ("EBBR", "Brussels", "Brussels", "Belgium"),
    ("EIDW", "Dublin", "Dublin", "Ireland"),
    ("EKCH", "Copenhagen", "Copenhagen", "Denmark"),
    ("ESSA", "Arlanda", "Stockholm", "Sweden"),
    ("ENGM", "Gardermoen", "Oslo", "Norway"),
    ("EFHK", "Helsinki-Vantaa", "Helsinki", "Finland"),
    ("EPWA", "Chopin", "Warsaw", "Poland"),
    ("LKPR", "Václav Havel", "Prague", "Czech Republic"),
    ("LGAV", "Eleftherios Venizelos", "Athens", "Greece"),
    ("LTFM", "Istanbul", "Istanbul", "Turkey"),
    ("UUEE", "Sheremetyevo", "Moscow", "Russia"),
    ("LPPT", "Humberto Delgado", "Lisbon", "Portugal"),
    // Middle East
    ("OMDB", "Dubai International", "Dubai", "UAE"),
    ("OERK", "King Khalid International", "Riyadh", "Saudi Arabia"),
    ("OTHH", "Hamad International", "Doha", "Qatar"),
    ("OJAI", "Queen Alia International", "Amman", "Jordan"),
    ("LLBG", "Ben Gurion", "Tel Aviv", "Israel"),
    // Asia
    ("RJTT", "Haneda", "Tokyo", "Japan"),
    ("RJAA", "Narita International", "Tokyo", "Japan"),
    ("RKSI", "Incheon International", "Seoul", "South Korea"),
    ("VHHH", "Hong Kong International", "Hong Kong", "China"),
    ("ZBAA", "Capital International", "Beijing", "China"),
    ("ZSPD", "Pudong International", "Shanghai", "China"),
    ("WSSS", "Changi", "Singapore", "Singapore"),
    ("VTBS", "Suvarnabhumi", "Bangkok", "Thailand"),
    ("VIDP", "Indira Gandhi International", "New Delhi", "India"),
    ("VABB", "Chhatrapati Shivaji Maharaj", "Mumbai", "India"),
    ("WMKK", "Kuala Lumpur International", "Kuala Lumpur", "Malaysia"),
    ("WIII", "Soekarno-Hatta International", "Jakarta", "Indonesia"),
    ("RPLL", "Ninoy Aquino International", "Manila", "Philippines"),
    ("VVNB", "Noi Bai International", "Hanoi", "Vietnam"),
    // Africa
    ("FACT", "Cape Town International", "Cape Town", "South Africa"),
    ("FAOR", "O.R. Tambo International", "Johannesburg", "South Africa"),
    ("HECA", "Cairo International", "Cairo", "Egypt"),
    ("GMMN", "Mohammed V International", "Casablanca", "Morocco"),
    ("GMME", "Rabat-Salé", "Rabat", "Morocco"),
    ("GMFF", "Fès-Saïss", "Fes", "Morocco"),
    ("GMMX", "Marrakech Menara", "Marrakech", "Morocco"),
    ("GMTT", "Tangier Ibn Battouta", "Tangier", "Morocco"),
    ("DNMM", "Murtala Muhammed International", "Lagos", "Nigeria"),
    ("HKJK", "Jomo Kenyatta International", "Nairobi", "Kenya"),
    // Oceania
    ("YSSY", "Sydney Kingsford Smith", "Sydney", "Australia"),
    ("YMML", "Melbourne", "Melbourne", "Australia"),
    ("NZAA", "Auckland", "Auckland", "New Zealand"),
    // Americas
    ("CYYZ", "Pearson International", "Toronto", "Canada"),
    ("CYVR", "Vancouver International", "Vancouver", "Canada"),
    ("CYUL", "Trudeau International", "Montreal", "Canada"),
    ("MMMX", "Benito Juárez International", "Mexico City", "Mexico"),
    ("SBGR", "Guarulhos International", "São Paulo", "Brazil"),
    ("SCEL", "Arturo Merino Benítez", "Santiago", "Chile"),
    ("SAEZ", "Ministro Pistarini", "Buenos Aires", "Argentina"),
    ("SKBO", "El Dorado International", "Bogotá", "Colombia"),
    ("SEQM", "Mariscal Sucre International", "Quito", "Ecuador"),
    ("SPJC", "Jorge Chávez International", "Lima", "Peru"),
];

/// Look up an airport by ICAO code, case-insensitively
pub fn lookup(code: &str) -> Option<AirportInfo> {
    AIRPORTS
        .iter()
        .find(|(c, _, _, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, name, city, country)| AirportInfo {
            code: (*c).to_string(),
            name: (*name).to_string(),
            city: (*city).to_string(),
            country: (*country).to_string(),
        })
}

/// Placeholder for a code that is present upstream but not in the table
pub fn placeholder(code: &str) -> AirportInfo {
    AirportInfo {
        code: code.to_uppercase(),
        name: "Unknown Airport".to_string(),
        city: code.to_uppercase(),
        country: String::new(),
    }
}

/// Format an airport for display, e.g. "Paris CDG (France)"
pub fn display(info: Option<&AirportInfo>) -> String {
    match info {
        Some(a) => {
            let tail = if a.code.len() >= 3 {
                &a.code[a.code.len() - 3..]
            } else {
                a.code.as_str()
            };
            format!("{} {} ({})", a.city, tail, a.country)
        }
        None => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        let a = lookup("KJFK").unwrap();
        assert_eq!(a.city, "New York");
        assert_eq!(a.country, "USA");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("egll"), lookup("EGLL"));
        assert!(lookup("egll").is_some());
    }

    #[test]
    fn test_lookup_miss_is_none() {
        assert!(lookup("ZZZZ").is_none());
    }

    #[test]
    fn test_display_known() {
        let a = lookup("KJFK").unwrap();
        assert_eq!(display(Some(&a)), "New York JFK (USA)");
    }

    #[test]
    fn test_display_none() {
        assert_eq!(display(None), "Unknown");
    }

    #[test]
    fn test_placeholder_carries_code() {
        let p = placeholder("lfbd");
        assert_eq!(p.code, "LFBD");
        assert_eq!(p.name, "Unknown Airport");
        assert_eq!(p.city, "LFBD");
        assert_eq!(p.country, "");
    }
}
