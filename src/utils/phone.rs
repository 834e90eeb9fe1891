use std::sync::OnceLock;

use regex::RegexSet;

/// The regional heuristic table behind phone normalization.
///
/// The constants are data, not control flow: swapping the table retargets
/// the heuristic without touching `normalize`.
pub struct NumberPlan {
    /// Country code prepended to bare national numbers.
    pub home_country_code: &'static str,
    /// Digit counts of a national number missing its country code.
    pub home_country_digit_lengths: &'static [usize],
    /// Full-number forms that already carry a foreign country code and must
    /// never be given the home one.
    pub foreign_exempt_patterns: &'static [&'static str],
    /// User-part forms reserved for bot accounts.
    pub bot_id_patterns: &'static [&'static str],
    foreign_exempt: OnceLock<RegexSet>,
    bot_ids: OnceLock<RegexSet>,
}

/// Brazilian numbering: DDI 55, 10-digit landlines and 11-digit mobiles,
/// with NANP numbers (`1` + area code `2`-`9`) exempt from prefixing.
pub static BRAZIL_PLAN: NumberPlan = NumberPlan::new(
    "55",
    &[10, 11],
    &[r"^1[2-9][0-9]{9}$"],
    &[r"^1313555[0-9]{4}$", r"^131655500[0-9]{2}$"],
);

impl NumberPlan {
    pub const fn new(
        home_country_code: &'static str,
        home_country_digit_lengths: &'static [usize],
        foreign_exempt_patterns: &'static [&'static str],
        bot_id_patterns: &'static [&'static str],
    ) -> Self {
        Self {
            home_country_code,
            home_country_digit_lengths,
            foreign_exempt_patterns,
            bot_id_patterns,
            foreign_exempt: OnceLock::new(),
            bot_ids: OnceLock::new(),
        }
    }

    /// Canonical digit string for a raw phone number.
    ///
    /// Strips everything that is not a digit, drops leading zeros, leaves
    /// foreign-exempt numbers alone, undoes a home country code mistakenly
    /// stacked on top of one, and prefixes the home code onto bare national
    /// forms. Idempotent: normalizing twice changes nothing.
    pub fn normalize(&self, raw: &str) -> String {
        let mut digits = digits_of(raw);
        while digits.starts_with('0') && digits.len() > 1 {
            digits.remove(0);
        }

        if self.is_foreign_exempt(&digits) {
            return digits;
        }
        if let Some(rest) = digits.strip_prefix(self.home_country_code) {
            if self.is_foreign_exempt(rest) {
                return rest.to_string();
            }
        }
        if self.home_country_digit_lengths.contains(&digits.len()) {
            return format!("{}{}", self.home_country_code, digits);
        }
        digits
    }

    /// Whether the number dials outside the home country.
    pub fn is_international(&self, raw: &str) -> bool {
        let digits = digits_of(raw);
        if self.is_foreign_exempt(&digits) {
            return false;
        }
        !digits.is_empty() && !digits.starts_with(self.home_country_code)
    }

    /// Whether the number is hidden or truncated: a leading zero, or too few
    /// digits to be a dialable national number.
    pub fn is_hidden(&self, raw: &str) -> bool {
        let digits = digits_of(raw);
        let min_national = self.home_country_digit_lengths.iter().copied().min().unwrap_or(0);
        digits.starts_with('0') || digits.len() < min_national
    }

    pub fn is_bot_id(&self, user: &str) -> bool {
        self.bot_id_set().is_match(user)
    }

    fn is_foreign_exempt(&self, digits: &str) -> bool {
        self.foreign_exempt_set().is_match(digits)
    }

    fn foreign_exempt_set(&self) -> &RegexSet {
        self.foreign_exempt
            .get_or_init(|| RegexSet::new(self.foreign_exempt_patterns).expect("foreign exempt patterns compile"))
    }

    fn bot_id_set(&self) -> &RegexSet {
        self.bot_ids
            .get_or_init(|| RegexSet::new(self.bot_id_patterns).expect("bot id patterns compile"))
    }
}

/// Shared digit-extraction step for every predicate in this module.
fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn normalize_phone_number(raw: &str) -> String {
    BRAZIL_PLAN.normalize(raw)
}

pub fn is_international_number(raw: &str) -> bool {
    BRAZIL_PLAN.is_international(raw)
}

pub fn is_hidden_number(raw: &str) -> bool {
    BRAZIL_PLAN.is_hidden(raw)
}
