//! CLDR cardinal plural rules for integer quantities.
//!
//! Conditions are written as C expressions over the lv_i18n operands
//! `n` (absolute value), `i` (integer digits) and `v` (visible fraction
//! digits, always 0 for integers), so the native emitter can paste them
//! into the generated selection function unchanged.

use super::PluralCategory;

/// Plural rule of one language: ordered `(category, condition)` branches,
/// falling through to `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralRule {
    pub name: &'static str,
    pub branches: &'static [(PluralCategory, &'static str)],
}

impl PluralRule {
    /// Categories this rule can select, `other` included.
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<_> = self.branches.iter().map(|(c, _)| *c).collect();
        categories.push(PluralCategory::Other);
        categories
    }
}

pub const OTHER_ONLY: PluralRule = PluralRule {
    name: "other-only",
    branches: &[],
};

const ONE_INTEGER: PluralRule = PluralRule {
    name: "one-integer",
    branches: &[(PluralCategory::One, "i == 1 && v == 0")],
};

const ZERO_OR_ONE: PluralRule = PluralRule {
    name: "zero-or-one",
    branches: &[(PluralCategory::One, "i == 0 || i == 1")],
};

const EAST_SLAVIC: PluralRule = PluralRule {
    name: "east-slavic",
    branches: &[
        (PluralCategory::One, "v == 0 && i % 10 == 1 && i % 100 != 11"),
        (
            PluralCategory::Few,
            "v == 0 && (i % 10 >= 2 && i % 10 <= 4) && !(i % 100 >= 12 && i % 100 <= 14)",
        ),
        (
            PluralCategory::Many,
            "v == 0 && (i % 10 == 0 || (i % 10 >= 5 && i % 10 <= 9) || (i % 100 >= 11 && i % 100 <= 14))",
        ),
    ],
};

const POLISH: PluralRule = PluralRule {
    name: "polish",
    branches: &[
        (PluralCategory::One, "i == 1 && v == 0"),
        (
            PluralCategory::Few,
            "v == 0 && (i % 10 >= 2 && i % 10 <= 4) && !(i % 100 >= 12 && i % 100 <= 14)",
        ),
        (
            PluralCategory::Many,
            "v == 0 && ((i != 1 && i % 10 <= 1) || (i % 10 >= 5 && i % 10 <= 9) || (i % 100 >= 12 && i % 100 <= 14))",
        ),
    ],
};

const WEST_SLAVIC: PluralRule = PluralRule {
    name: "west-slavic",
    branches: &[
        (PluralCategory::One, "i == 1 && v == 0"),
        (PluralCategory::Few, "(i >= 2 && i <= 4) && v == 0"),
        (PluralCategory::Many, "v != 0"),
    ],
};

const ARABIC: PluralRule = PluralRule {
    name: "arabic",
    branches: &[
        (PluralCategory::Zero, "n == 0"),
        (PluralCategory::One, "n == 1"),
        (PluralCategory::Two, "n == 2"),
        (PluralCategory::Few, "n % 100 >= 3 && n % 100 <= 10"),
        (PluralCategory::Many, "n % 100 >= 11 && n % 100 <= 99"),
    ],
};

/// Primary language subtag -> rule.
const RULES: &[(&str, PluralRule)] = &[
    ("ar", ARABIC),
    ("be", EAST_SLAVIC),
    ("bg", ONE_INTEGER),
    ("ca", ONE_INTEGER),
    ("cs", WEST_SLAVIC),
    ("da", ONE_INTEGER),
    ("de", ONE_INTEGER),
    ("el", ONE_INTEGER),
    ("en", ONE_INTEGER),
    ("es", ONE_INTEGER),
    ("et", ONE_INTEGER),
    ("fi", ONE_INTEGER),
    ("fr", ZERO_OR_ONE),
    ("hu", ONE_INTEGER),
    ("id", OTHER_ONLY),
    ("it", ONE_INTEGER),
    ("ja", OTHER_ONLY),
    ("ko", OTHER_ONLY),
    ("nb", ONE_INTEGER),
    ("nl", ONE_INTEGER),
    ("no", ONE_INTEGER),
    ("pl", POLISH),
    ("pt", ZERO_OR_ONE),
    ("ru", EAST_SLAVIC),
    ("sk", WEST_SLAVIC),
    ("sv", ONE_INTEGER),
    ("th", OTHER_ONLY),
    ("tr", ONE_INTEGER),
    ("uk", EAST_SLAVIC),
    ("vi", OTHER_ONLY),
    ("zh", OTHER_ONLY),
];

/// Primary language subtag of a locale code: `"zh-CN"` -> `"zh"`.
fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

/// Look up the plural rule for `locale`.
///
/// Returns `None` for languages not in the table; callers fall back to
/// [`OTHER_ONLY`] and should warn.
pub fn plural_rule_for(locale: &str) -> Option<PluralRule> {
    let language = language_of(locale);
    RULES
        .binary_search_by(|(lang, _)| (*lang).cmp(language.as_str()))
        .ok()
        .map(|idx| RULES[idx].1)
}
