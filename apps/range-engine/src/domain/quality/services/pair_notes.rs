//! Static per-pair advice table.

use crate::domain::shared::{Method, Pair};

/// Which pairs a note applies to.
#[derive(Debug, Clone, Copy)]
enum PairMatcher {
    /// One specific pair.
    Exact(&'static str),
    /// Any pair with this currency on either side.
    Involves(&'static str),
    /// Any pair quoted in yen.
    JpyQuoted,
}

impl PairMatcher {
    fn matches(self, pair: &Pair) -> bool {
        match self {
            Self::Exact(symbol) => pair.as_str() == symbol,
            Self::Involves(currency) => pair.involves(currency),
            Self::JpyQuoted => pair.is_jpy_quoted(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PairNote {
    matcher: PairMatcher,
    /// Empty means every method.
    methods: &'static [Method],
    text: &'static str,
}

impl PairNote {
    fn applies(&self, pair: &Pair, method: Method) -> bool {
        self.matcher.matches(pair) && (self.methods.is_empty() || self.methods.contains(&method))
    }
}

const PAIR_NOTES: &[PairNote] = &[
    PairNote {
        matcher: PairMatcher::Exact("EURUSD"),
        methods: &[],
        text: "EURUSD: deepest liquidity, SD levels tend to be respected cleanly",
    },
    PairNote {
        matcher: PairMatcher::Involves("GBP"),
        methods: &[],
        text: "GBP pairs: wider stops, higher volatility; allow a few pips beyond each SD level",
    },
    PairNote {
        matcher: PairMatcher::JpyQuoted,
        methods: &[],
        text: "JPY-quoted pair: pips are measured at 0.01 and prices shown to 3 decimals",
    },
    PairNote {
        matcher: PairMatcher::Exact("GBPJPY"),
        methods: &[Method::Asian],
        text: "GBPJPY Asian ranges regularly exceed 50 pips; prefer the Flout Session",
    },
    PairNote {
        matcher: PairMatcher::Involves("AUD"),
        methods: &[Method::Asian],
        text: "AUD pairs trade actively in the Asian session; expect a wider Asian range",
    },
    PairNote {
        matcher: PairMatcher::Involves("NZD"),
        methods: &[Method::Asian],
        text: "NZD pairs trade actively in the Asian session; expect a wider Asian range",
    },
    PairNote {
        matcher: PairMatcher::Involves("CHF"),
        methods: &[Method::Cbdr, Method::Flout],
        text: "CHF pairs: often move inverse to EURUSD; confirm the range against the dollar",
    },
    PairNote {
        matcher: PairMatcher::Exact("USDCAD"),
        methods: &[Method::Cbdr],
        text: "USDCAD: oil inventory releases can break the CBDR; check the calendar",
    },
];

/// Advice lines for `pair` under `method`, in table order.
#[must_use]
pub fn pair_recommendations(pair: &Pair, method: Method) -> Vec<String> {
    PAIR_NOTES
        .iter()
        .filter(|note| note.applies(pair, method))
        .map(|note| note.text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(symbol: &str, method: Method) -> Vec<String> {
        pair_recommendations(&Pair::parse(symbol).unwrap(), method)
    }

    #[test]
    fn gbp_pairs_get_volatility_note() {
        for symbol in ["GBPUSD", "EURGBP", "GBPJPY"] {
            let lines = notes(symbol, Method::Cbdr);
            assert!(
                lines.iter().any(|l| l.contains("wider stops, higher volatility")),
                "{symbol}: {lines:?}"
            );
        }
    }

    #[test]
    fn jpy_quoted_note_only_for_quote_side() {
        assert!(notes("USDJPY", Method::Flout).iter().any(|l| l.contains("0.01")));
        assert!(!notes("JPYUSD", Method::Flout).iter().any(|l| l.contains("0.01")));
    }

    #[test]
    fn method_specific_notes() {
        let asian = notes("GBPJPY", Method::Asian);
        let cbdr = notes("GBPJPY", Method::Cbdr);
        assert!(asian.iter().any(|l| l.contains("prefer the Flout Session")));
        assert!(!cbdr.iter().any(|l| l.contains("prefer the Flout Session")));
    }

    #[test]
    fn table_order_is_preserved() {
        let lines = notes("GBPJPY", Method::Asian);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("GBP pairs"));
        assert!(lines[1].starts_with("JPY-quoted"));
        assert!(lines[2].starts_with("GBPJPY"));
    }

    #[test]
    fn unlisted_pair_gets_nothing() {
        assert!(notes("EURCAD", Method::Cbdr).is_empty());
    }

    #[test]
    fn eurusd_note() {
        assert_eq!(notes("EURUSD", Method::Asian).len(), 1);
    }
}
