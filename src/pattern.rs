use regex::Regex;

/// How a rule recognises a label.
#[derive(Debug)]
pub enum Matcher {
    /// Regex searched anywhere in the label. The first capture group must be
    /// a run of ASCII digits; its value is handed back with the outcome.
    Numbered(Regex),
    /// Whole-label equality.
    Exact(&'static str),
    /// Case-insensitive substring test against any of the keywords.
    /// Keywords are written lower-case.
    Keywords(&'static [&'static str]),
}

#[derive(Debug)]
pub struct Rule<T> {
    pub matcher: Matcher,
    pub outcome: T,
}

/// Ordered list of rules, first match wins.
#[derive(Debug)]
pub struct PatternTable<T> {
    rules: Vec<Rule<T>>,
}

impl<T> PatternTable<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        PatternTable { rules }
    }

    /// Returns the outcome of the first rule that matches `label`, together
    /// with the number captured by a `Numbered` matcher.
    pub fn classify(&self, label: &str) -> Option<(&T, Option<i64>)> {
        let lowered = label.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.matcher
                .test(label, &lowered)
                .map(|number| (&rule.outcome, number))
        })
    }
}

impl Matcher {
    /// `Some(captured)` when the label matches, `None` otherwise.
    fn test(&self, label: &str, lowered: &str) -> Option<Option<i64>> {
        match self {
            Matcher::Numbered(re) => {
                let digits = re.captures(label)?.get(1)?.as_str();
                // too many digits for an i64 is treated as no match
                digits.parse::<i64>().ok().map(Some)
            }
            Matcher::Exact(expected) => {
                if label == *expected {
                    Some(None)
                } else {
                    None
                }
            }
            Matcher::Keywords(keywords) => {
                if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                    Some(None)
                } else {
                    None
                }
            }
        }
    }
}

pub fn numbered(pattern: &str) -> Matcher {
    // patterns are compile-time literals; a bad one is a programming error
    Matcher::Numbered(Regex::new(pattern).expect("valid grade pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PatternTable<&'static str> {
        PatternTable::new(vec![
            Rule {
                matcher: numbered(r"(?i)level\s+([0-9]+)"),
                outcome: "level",
            },
            Rule {
                matcher: Matcher::Exact("Top"),
                outcome: "top",
            },
            Rule {
                matcher: Matcher::Keywords(&["year", "yr"]),
                outcome: "year",
            },
        ])
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = table();
        assert_eq!(table.classify("Level 3 year"), Some((&"level", Some(3))));
        assert_eq!(table.classify("Top"), Some((&"top", None)));
        assert_eq!(table.classify("YEAR two"), Some((&"year", None)));
    }

    #[test]
    fn exact_is_case_sensitive() {
        assert_eq!(table().classify("top"), None);
    }

    #[test]
    fn overflowing_digits_fall_through() {
        let table = table();
        assert_eq!(
            table.classify("Level 99999999999999999999 yr"),
            Some((&"year", None))
        );
        assert_eq!(table.classify("Level 99999999999999999999"), None);
    }
}
