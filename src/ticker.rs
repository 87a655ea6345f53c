/// Taiwan-exchange suffixes recognized on ticker symbols.
const EXCHANGE_SUFFIXES: [&str; 2] = [".TWO", ".TW"];

/// Numeric Taiwan stock codes the upstream keyword search only knows by
/// company name.
const COMPANY_ALIASES: [(&str, &str); 3] = [
    ("2330", "台積電"),
    ("2317", "鴻海"),
    ("2454", "聯發科"),
];

/// Turns a ticker into the query string sent upstream: strips a trailing
/// exchange suffix, then maps known numeric codes to company names. Anything
/// else (other numeric codes, plain keywords) passes through unchanged.
pub fn resolve_query(ticker: &str) -> String {
    let bare = EXCHANGE_SUFFIXES
        .iter()
        .find_map(|suffix| ticker.strip_suffix(suffix))
        .unwrap_or(ticker);

    if is_numeric(bare)
        && let Some((_, name)) = COMPANY_ALIASES.iter().find(|(code, _)| *code == bare)
    {
        return name.to_string();
    }

    bare.to_string()
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tw_suffix() {
        assert_eq!(resolve_query("6488.TW"), "6488");
    }

    #[test]
    fn strips_two_suffix_without_mangling() {
        assert_eq!(resolve_query("5483.TWO"), "5483");
    }

    #[test]
    fn maps_known_codes_to_company_names() {
        assert_eq!(resolve_query("2330"), "台積電");
        assert_eq!(resolve_query("2317"), "鴻海");
        assert_eq!(resolve_query("2454"), "聯發科");
    }

    #[test]
    fn maps_after_suffix_stripping() {
        assert_eq!(resolve_query("2330.TW"), "台積電");
    }

    #[test]
    fn unknown_numeric_code_passes_through() {
        assert_eq!(resolve_query("9999"), "9999");
    }

    #[test]
    fn plain_keyword_passes_through() {
        assert_eq!(resolve_query("semiconductors"), "semiconductors");
    }

    #[test]
    fn suffix_only_matches_at_end() {
        assert_eq!(resolve_query("ACME.TW.HOLDINGS"), "ACME.TW.HOLDINGS");
    }

    #[test]
    fn empty_ticker_passes_through() {
        assert_eq!(resolve_query(""), "");
    }
}
