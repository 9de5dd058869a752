//! Cache key builders for all Skywatch cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Cache key for the current conditions of a city query.
///
/// The query is lowercased and trimmed, and every character outside
/// `[a-z0-9_-]` becomes `_`. Non-ASCII letters are not folded, so
/// `"São Paulo"` and `"Sao Paulo"` map to different keys.
pub fn weather_current(city_query: &str) -> String {
    let safe: String = city_query
        .to_lowercase()
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("weather_{safe}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(weather_current("  London "), "weather_london");
    }

    #[test]
    fn replaces_disallowed_characters() {
        assert_eq!(weather_current("Paris,FR"), "weather_paris_fr");
        assert_eq!(weather_current("New-York_2"), "weather_new-york_2");
    }

    #[test]
    fn diacritics_do_not_collide_with_ascii() {
        let accented = weather_current("São Paulo!");
        let plain = weather_current("sao paulo");
        assert_eq!(accented, "weather_s_o_paulo_");
        assert_eq!(plain, "weather_sao_paulo");
        assert_ne!(accented, plain);
    }

    #[test]
    fn case_variants_share_a_key() {
        assert_eq!(weather_current("LONDON"), weather_current("london"));
    }
}
