use serde::{Deserialize, Deserializer, Serialize};

/// One assessment statement with its answer scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub dimension: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub options: Vec<Choice>,
}

/// A selectable answer. The value token doubles as the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(deserialize_with = "value_token")]
    pub value: String,
    pub label: String,
}

impl Choice {
    /// The score recorded when this choice is picked, if the token is numeric.
    pub fn score(&self) -> Option<i32> {
        self.value.trim().parse().ok()
    }
}

impl Question {
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.options.get(index)
    }
}

/// Accepts `"3"` as well as `3` for an option value.
fn value_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Token {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Token::deserialize(deserializer)? {
        Token::Text(text) => text,
        Token::Int(n) => n.to_string(),
        Token::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_question_from_service_shape() {
        let json = r#"{
            "id": 7,
            "question": "I like repairing engines",
            "dimension": "R",
            "type": "likert",
            "options": [
                {"value": "1", "label": "Strongly disagree"},
                {"value": 5, "label": "Strongly agree"}
            ]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 7);
        assert_eq!(question.prompt, "I like repairing engines");
        assert_eq!(question.kind.as_deref(), Some("likert"));
        assert_eq!(question.options[0].score(), Some(1));
        assert_eq!(question.options[1].value, "5");
        assert_eq!(question.options[1].score(), Some(5));
    }

    #[test]
    fn test_non_numeric_token_has_no_score() {
        let choice = Choice {
            value: "often".to_string(),
            label: "Often".to_string(),
        };
        assert_eq!(choice.score(), None);
    }
}
