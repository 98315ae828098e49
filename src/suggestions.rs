//! Starter questions shown as chips on the landing page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub emoji: &'static str,
}

pub static SUGGESTIONS: [Suggestion; 8] = [
    Suggestion { text: "GPA Requirements", emoji: "📊" },
    Suggestion { text: "What is GRE?", emoji: "📝" },
    Suggestion { text: "IELTS/TOEFL", emoji: "🌍" },
    Suggestion { text: "Required Documents", emoji: "📄" },
    Suggestion { text: "Application Process", emoji: "📋" },
    Suggestion { text: "What is SOP?", emoji: "✍️" },
    Suggestion { text: "Eligibility", emoji: "✅" },
    Suggestion { text: "Application Fee", emoji: "💰" },
];

#[derive(Debug, Serialize)]
pub struct SuggestionList {
    pub suggestions: &'static [Suggestion],
}

pub fn suggestion_list() -> SuggestionList {
    SuggestionList {
        suggestions: &SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(suggestion_list()).unwrap();
        let items = json["suggestions"].as_array().unwrap();
        assert_eq!(items.len(), 8);
        assert_eq!(items[0], serde_json::json!({"text": "GPA Requirements", "emoji": "📊"}));
        assert_eq!(items[7]["text"], "Application Fee");
    }
}
