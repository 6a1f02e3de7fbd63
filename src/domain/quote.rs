use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    pub genre: String,
}

impl Quote {
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "Unknown"
        } else {
            &self.author
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(author: &str) -> Quote {
        Quote {
            id: "5eb17aadb69dc744b4e70d4a".into(),
            text: "The journey of a thousand miles begins with one step.".into(),
            author: author.into(),
            genre: "wisdom".into(),
        }
    }

    #[test]
    fn test_display_author() {
        assert_eq!(quote("Lao Tzu").display_author(), "Lao Tzu");
    }

    #[test]
    fn test_display_author_unknown_when_empty() {
        assert_eq!(quote("").display_author(), "Unknown");
    }
}
