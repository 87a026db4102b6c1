//! Two-pass airport search.

use std::collections::HashSet;

use super::parse::AirportRecord;

/// Search `airports` by identifier prefix, then by name substring.
///
/// Both passes are case-insensitive and keep the input order (the directory
/// is sorted by identifier). Identifier-prefix matches always come first;
/// name matches only fill the remaining slots up to `limit`.
pub fn search_airports(
    airports: &[AirportRecord],
    query: &str,
    limit: usize,
) -> Vec<AirportRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_upper = query.trim().to_uppercase();
    let query_lower = query.trim().to_lowercase();

    let mut results: Vec<&AirportRecord> = Vec::new();

    for airport in airports {
        if results.len() >= limit {
            break;
        }
        if airport.icao.starts_with(&query_upper) {
            results.push(airport);
        }
    }

    if results.len() < limit {
        let seen: HashSet<&str> = results.iter().map(|a| a.icao.as_str()).collect();
        for airport in airports {
            if results.len() >= limit {
                break;
            }
            if !seen.contains(airport.icao.as_str())
                && airport.name.to_lowercase().contains(&query_lower)
            {
                results.push(airport);
            }
        }
    }

    results.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(icao: &str, name: &str) -> AirportRecord {
        AirportRecord {
            icao: icao.to_string(),
            name: name.to_string(),
            state: "MA".to_string(),
            lat: 42.0,
            lon: -71.0,
        }
    }

    fn icaos(results: &[AirportRecord]) -> Vec<&str> {
        results.iter().map(|a| a.icao.as_str()).collect()
    }

    fn directory() -> Vec<AirportRecord> {
        vec![
            airport("KBED", "Laurence G Hanscom Field"),
            airport("KBOA", "Logan Intl"),
            airport("KBOS", "General Edward Lawrence Logan Intl"),
            airport("KOWD", "Norwood Memorial"),
            airport("KXBO", "Boston Executive"),
        ]
    }

    #[test]
    fn empty_query_returns_nothing() {
        assert!(search_airports(&directory(), "", 15).is_empty());
    }

    #[test]
    fn prefix_matches_in_identifier_order() {
        let results = search_airports(&directory(), "KBO", 15);
        assert_eq!(icaos(&results), vec!["KBOA", "KBOS"]);
    }

    #[test]
    fn prefix_match_precedes_name_match() {
        // KAAA sorts first but only matches by name.
        let airports = vec![
            airport("KAAA", "Kx Field"),
            airport("KXBO", "Boston Executive"),
        ];
        let results = search_airports(&airports, "kx", 15);
        assert_eq!(icaos(&results), vec!["KXBO", "KAAA"]);
    }

    #[test]
    fn name_only_matches() {
        // "BO" is not an identifier prefix of anything here.
        let results = search_airports(&directory(), "bo", 15);
        assert_eq!(icaos(&results), vec!["KXBO"]);

        let results = search_airports(&directory(), "logan", 15);
        assert_eq!(icaos(&results), vec!["KBOA", "KBOS"]);
    }

    #[test]
    fn identifier_prefix_is_case_insensitive() {
        let results = search_airports(&directory(), "kbed", 15);
        assert_eq!(icaos(&results), vec!["KBED"]);
    }

    #[test]
    fn no_duplicates_across_passes() {
        let airports = vec![airport("KLOG", "Logan Field")];
        let results = search_airports(&airports, "klog", 15);
        assert_eq!(results.len(), 1);

        let airports = vec![airport("LOGA", "Logan Field")];
        let results = search_airports(&airports, "lo", 15);
        assert_eq!(icaos(&results), vec!["LOGA"]);
    }

    #[test]
    fn limit_truncates_prefix_pass() {
        let results = search_airports(&directory(), "K", 2);
        assert_eq!(icaos(&results), vec!["KBED", "KBOA"]);
    }

    #[test]
    fn limit_truncates_name_pass() {
        let results = search_airports(&directory(), "KBOA", 1);
        assert_eq!(icaos(&results), vec!["KBOA"]);

        let results = search_airports(&directory(), "intl", 1);
        assert_eq!(icaos(&results), vec!["KBOA"]);
    }

    #[test]
    fn query_is_trimmed() {
        let results = search_airports(&directory(), " kowd ", 15);
        assert_eq!(icaos(&results), vec!["KOWD"]);
    }
}
