//! Canned answers for the questions asked most often.
//!
//! A question that mentions one of the keywords below is answered straight
//! from this table without touching the inference backend. Matching is a
//! case-insensitive substring test and the first rule in table order wins.

/// A keyword and the answer returned when a question contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickRule {
    pub keyword: &'static str,
    pub answer: &'static str,
}

const fn rule(keyword: &'static str, answer: &'static str) -> QuickRule {
    QuickRule { keyword, answer }
}

/// Built-in rules. Order is precedence. Keywords must be lower-case.
pub const QUICK_RULES: &[QuickRule] = &[
    rule("gpa", "GPA requirement: Minimum 6.0/10 CGPA"),
    rule("gre", "GRE is required for most postgraduate programs"),
    rule("ielts", "IELTS/TOEFL required for international students"),
    rule(
        "application fee",
        "Please check the university website for exact fee amount",
    ),
    rule(
        "documents",
        "Required: Transcripts, ID proof, SOP, Resume, Test scores",
    ),
    rule(
        "eligibility",
        "Undergrad: 60% in 12th grade. Postgrad: Bachelor's + CGPA 6.0/10",
    ),
    rule(
        "application process",
        "1) Choose program 2) Check eligibility 3) Prepare docs 4) Submit 5) Track status",
    ),
    rule(
        "sor",
        "Statement of Purpose (SOP) - Write about your goals and why this program",
    ),
    rule(
        "lor",
        "Letters of Recommendation - Typically 2-3 letters from professors/mentors",
    ),
    rule(
        "deadline",
        "Please check your program's specific deadline on the university website",
    ),
];

/// First-hit keyword matcher over an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct QuickAnswerMatcher {
    rules: &'static [QuickRule],
}

impl QuickAnswerMatcher {
    pub fn new(rules: &'static [QuickRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [QuickRule] {
        self.rules
    }

    /// Return the rule whose keyword occurs first in table order, if any.
    pub fn find(&self, question: &str) -> Option<&'static QuickRule> {
        let lowered = question.to_lowercase();
        self.rules.iter().find(|r| lowered.contains(r.keyword))
    }

    /// Canned answer for `question`, if one applies.
    pub fn answer(&self, question: &str) -> Option<&'static str> {
        self.find(question).map(|r| r.answer)
    }
}

impl Default for QuickAnswerMatcher {
    fn default() -> Self {
        Self::new(QUICK_RULES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_question() {
        let matcher = QuickAnswerMatcher::default();
        assert_eq!(
            matcher.answer("What is the GPA requirement?"),
            Some("GPA requirement: Minimum 6.0/10 CGPA")
        );
    }

    #[test]
    fn test_every_keyword_matches_in_any_case() {
        let matcher = QuickAnswerMatcher::default();
        for rule in QUICK_RULES {
            let question = format!("Quick one: {} please", rule.keyword.to_uppercase());
            let hit = matcher.find(&question).expect("keyword should match");
            // An earlier keyword may be embedded in a later one; whichever
            // wins must come no later in the table.
            let hit_pos = QUICK_RULES.iter().position(|r| r == hit).unwrap();
            let own_pos = QUICK_RULES.iter().position(|r| r == rule).unwrap();
            assert!(hit_pos <= own_pos, "{} matched {}", rule.keyword, hit.keyword);
        }
    }

    #[test]
    fn test_substring_anywhere() {
        let matcher = QuickAnswerMatcher::default();
        assert_eq!(
            matcher.answer("submission DEADLINES for spring?"),
            Some("Please check your program's specific deadline on the university website")
        );
    }

    #[test]
    fn test_first_rule_wins_on_overlap() {
        let matcher = QuickAnswerMatcher::default();
        let hit = matcher
            .find("Is GRE part of the eligibility criteria?")
            .unwrap();
        assert_eq!(hit.keyword, "gre");
    }

    #[test]
    fn test_no_word_boundaries() {
        // "degree" contains "gre"
        let matcher = QuickAnswerMatcher::default();
        assert_eq!(matcher.find("Which degree suits me?").unwrap().keyword, "gre");
    }

    #[test]
    fn test_no_match() {
        let matcher = QuickAnswerMatcher::default();
        assert_eq!(matcher.answer("Tell me about the weather"), None);
        assert_eq!(matcher.answer(""), None);
    }

    #[test]
    fn test_custom_table() {
        static RULES: &[QuickRule] = &[rule("campus", "Main campus is downtown")];
        let matcher = QuickAnswerMatcher::new(RULES);
        assert_eq!(matcher.answer("Where is the CAMPUS?"), Some("Main campus is downtown"));
        assert_eq!(matcher.answer("What is the GPA requirement?"), None);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in QUICK_RULES {
            assert_eq!(rule.keyword, rule.keyword.to_lowercase());
        }
    }
}
