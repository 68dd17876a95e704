//! Free-text cleanup helpers

/// Strip space characters (ASCII and U+00A0) and normalize en-dash to hyphen
///
/// Spawn-rate cells render ranges like "4%–6%" with stray spaces around the
/// dash; downstream consumers expect the compact "4%-6%" form.
pub fn clean(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .map(|c| if c == '–' { '-' } else { c })
        .collect()
}

/// Title-case a name the way Python's `str.title()` does
///
/// A letter is uppercased when the preceding character is not a letter,
/// lowercased otherwise. Names in the sheet arrive all-lowercase.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_compacts_ranges() {
        assert_eq!(clean("4% – 6%"), "4%-6%");
        assert_eq!(clean("4%\u{a0}–\u{a0}6%"), "4%-6%");
        assert_eq!(clean("17%"), "17%");
    }

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("sea bass"), "Sea Bass");
        assert_eq!(title_case("moray eel"), "Moray Eel");
        assert_eq!(title_case("barreleye"), "Barreleye");
    }

    #[test]
    fn test_title_case_lowercases_the_rest() {
        assert_eq!(title_case("SEA BASS"), "Sea Bass");
    }

    #[test]
    fn test_title_case_after_punctuation() {
        assert_eq!(title_case("jack-o'-lantern"), "Jack-O'-Lantern");
    }
}
