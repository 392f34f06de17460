//! Heuristic strength scoring.

use std::fmt;

pub const MAX_SCORE: u8 = 10;

const LENGTH_STEPS: [usize; 4] = [8, 12, 16, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Nothing to score.
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Label {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => Label::VeryStrong,
            7.. => Label::Strong,
            4.. => Label::Medium,
            _ => Label::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Empty => "\u{2014}",
            Label::Weak => "Weak",
            Label::Medium => "Medium",
            Label::Strong => "Strong",
            Label::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: Label,
}

impl Strength {
    /// Score as a rounded percentage of the maximum, for bar rendering.
    pub fn percent(&self) -> u8 {
        ((self.score as f64 / MAX_SCORE as f64) * 100.0).round() as u8
    }
}

/// Score a password. Never fails; empty input gets the neutral result.
pub fn estimate(password: &str) -> Strength {
    if password.is_empty() {
        return Strength { score: 0, label: Label::Empty };
    }

    let chars: Vec<char> = password.chars().collect();
    let mut score: i32 = 0;

    score += LENGTH_STEPS.iter().filter(|&&n| chars.len() >= n).count() as i32;

    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_digit = chars.iter().any(|c| c.is_ascii_digit());
    let has_symbol = chars.iter().any(|c| !c.is_ascii_alphanumeric());
    score += [has_upper, has_lower, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count() as i32;

    if is_single_repeated(&chars) {
        score = 0;
    } else if has_triple_run(&chars) {
        score -= 1;
    }

    let score = score.clamp(0, MAX_SCORE as i32) as u8;
    Strength { score, label: Label::from_score(score) }
}

// A lone character is not a "repetition".
fn is_single_repeated(chars: &[char]) -> bool {
    chars.len() >= 2 && chars.iter().all(|c| *c == chars[0])
}

fn has_triple_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_neutral() {
        let s = estimate("");
        assert_eq!(s, Strength { score: 0, label: Label::Empty });
        assert_eq!(s.label.to_string(), "\u{2014}");
    }

    #[test]
    fn repeated_single_char_forced_to_zero() {
        assert_eq!(estimate("aaaaaaaa"), Strength { score: 0, label: Label::Weak });
        assert_eq!(estimate("!!!!!!!!!!!!!!!!!!!!!!!!!").score, 0);
        assert_eq!(estimate("zz").score, 0);
    }

    #[test]
    fn single_character_is_not_a_repetition() {
        assert_eq!(estimate("a"), Strength { score: 1, label: Label::Weak });
    }

    #[test]
    fn sixteen_chars_all_types() {
        assert_eq!(estimate("Ab3!Ab3!Ab3!Ab3!"), Strength { score: 7, label: Label::Strong });
    }

    #[test]
    fn length_points_are_cumulative() {
        // lowercase only, distinct neighbours: 1 type point
        let s = |n: usize| -> String { "ab".repeat(n / 2 + 1)[..n].to_string() };
        assert_eq!(estimate(&s(7)).score, 1);
        assert_eq!(estimate(&s(8)).score, 2);
        assert_eq!(estimate(&s(12)).score, 3);
        assert_eq!(estimate(&s(16)).score, 4);
        assert_eq!(estimate(&s(24)).score, 5);
        assert_eq!(estimate(&s(100)).score, 5);
    }

    #[test]
    fn triple_run_costs_one_point() {
        assert_eq!(estimate("Ab3!Ab3!Ab3!Ab3!").score, 7);
        assert_eq!(estimate("Ab3!Ab3!Ab3!AAA!").score, 6);
        // a pair is not a run
        assert_eq!(estimate("Ab3!Ab3!Ab3!AA3!").score, 7);
    }

    #[test]
    fn penalty_never_goes_negative() {
        assert_eq!(estimate("aaab").score, 0);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(estimate("\u{e9}").score, 1);
        assert_eq!(estimate("abc d").score, 2);
    }

    #[test]
    fn highest_reachable_score_is_eight() {
        // 4 length points + 4 type points; Very Strong needs 9
        let s = estimate("Ab3!Cd4@Ef5#Gh6$Ij7%Kl8^");
        assert_eq!(s, Strength { score: 8, label: Label::Strong });
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(Label::from_score(0), Label::Weak);
        assert_eq!(Label::from_score(3), Label::Weak);
        assert_eq!(Label::from_score(4), Label::Medium);
        assert_eq!(Label::from_score(6), Label::Medium);
        assert_eq!(Label::from_score(7), Label::Strong);
        assert_eq!(Label::from_score(8), Label::Strong);
        assert_eq!(Label::from_score(9), Label::VeryStrong);
        assert_eq!(Label::from_score(10), Label::VeryStrong);
        assert_eq!(Label::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(Strength { score: 7, label: Label::Strong }.percent(), 70);
        assert_eq!(Strength { score: 0, label: Label::Empty }.percent(), 0);
        assert_eq!(Strength { score: 10, label: Label::VeryStrong }.percent(), 100);
    }
}
