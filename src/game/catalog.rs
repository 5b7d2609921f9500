//! Level catalog: images, quizzes and load-time validation
//!
//! A catalog is immutable once built. Validation runs in the
//! constructor so a malformed quiz surfaces as a configuration error
//! instead of a level that can never be cleared.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference to a level's source image (e.g. `"level-1.jpeg"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One selectable quiz answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub correct: bool,
}

/// A multiple-choice question with exactly one correct option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Quiz {
    /// Index of the correct option, if the quiz has one
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|option| option.correct)
    }

    /// Whether the option at `index` is the correct answer.
    /// Out-of-range indices count as wrong.
    pub fn is_correct(&self, index: usize) -> bool {
        self.options
            .get(index)
            .map(|option| option.correct)
            .unwrap_or(false)
    }
}

/// One image-puzzle-plus-quiz unit in the sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub image: ImageRef,
    pub quiz: Quiz,
}

/// Catalog construction failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no levels")]
    Empty,
    #[error("level {level}: quiz has no options")]
    NoOptions { level: usize },
    #[error("level {level}: quiz has no correct option")]
    NoCorrectOption { level: usize },
    #[error("level {level}: quiz has {count} correct options, expected exactly one")]
    MultipleCorrectOptions { level: usize, count: usize },
    #[error("catalog json: {0}")]
    Json(String),
}

/// Validated, ordered list of levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Validate and seal a level list. Order is significant: it is the
    /// unlock order.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            if level.quiz.options.is_empty() {
                return Err(CatalogError::NoOptions { level: index });
            }
            let correct = level
                .quiz
                .options
                .iter()
                .filter(|option| option.correct)
                .count();
            match correct {
                1 => {}
                0 => return Err(CatalogError::NoCorrectOption { level: index }),
                count => {
                    return Err(CatalogError::MultipleCorrectOptions {
                        level: index,
                        count,
                    });
                }
            }
        }
        Ok(Self { levels })
    }

    /// Parse a catalog from JSON text (an array of levels)
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<Level> =
            serde_json::from_str(json).map_err(|err| CatalogError::Json(err.to_string()))?;
        Self::new(levels)
    }

    /// The three bundled civil-engineering levels
    pub fn builtin() -> Self {
        Self::new(builtin_levels()).expect("bundled catalog is well-formed")
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }
}

fn option(text: &str, correct: bool) -> QuizOption {
    QuizOption {
        text: text.to_string(),
        correct,
    }
}

fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            image: ImageRef::new("level-1.jpeg"),
            quiz: Quiz {
                question: "Which of the following BIS standards governs the quality of cement \
                           in India?"
                    .to_string(),
                options: vec![
                    option("a) IS 8112", true),
                    option("b) IS 2062", false),
                    option("c) IS 2706", false),
                    option("d) IS 1786", false),
                ],
            },
        },
        Level {
            image: ImageRef::new("level-2.jpeg"),
            quiz: Quiz {
                question: "What is the focus of IS 3370?".to_string(),
                options: vec![
                    option("a) Testing the compressive strength of concrete", false),
                    option(
                        "b) Protection of reinforced concrete structures against corrosion",
                        true,
                    ),
                    option("c) Standardization of cement mixing methods", false),
                    option("d) Designing building foundations", false),
                ],
            },
        },
        Level {
            image: ImageRef::new("level-3.jpeg"),
            quiz: Quiz {
                question: "Which BIS standard is used for determining the compressive strength \
                           of concrete blocks?"
                    .to_string(),
                options: vec![
                    option("a) IS 1443", false),
                    option("b) IS 2185", true),
                    option("c) IS 9000", false),
                    option("d) IS 2116", false),
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(correct_flags: &[bool]) -> Quiz {
        Quiz {
            question: "?".to_string(),
            options: correct_flags
                .iter()
                .enumerate()
                .map(|(i, &correct)| option(&format!("option {i}"), correct))
                .collect(),
        }
    }

    fn level(correct_flags: &[bool]) -> Level {
        Level {
            image: ImageRef::new("img.jpeg"),
            quiz: quiz(correct_flags),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        for index in 0..catalog.len() {
            let level = catalog.get(index).unwrap();
            assert!(level.quiz.correct_option().is_some());
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            LevelCatalog::new(Vec::new()).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn test_no_correct_option_rejected() {
        let result = LevelCatalog::new(vec![
            level(&[true, false]),
            level(&[false, false, false]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::NoCorrectOption { level: 1 }
        );
    }

    #[test]
    fn test_multiple_correct_options_rejected() {
        let result = LevelCatalog::new(vec![level(&[true, true, false])]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::MultipleCorrectOptions { level: 0, count: 2 }
        );
    }

    #[test]
    fn test_quiz_without_options_rejected() {
        let result = LevelCatalog::new(vec![level(&[])]);
        assert_eq!(result.unwrap_err(), CatalogError::NoOptions { level: 0 });
    }

    #[test]
    fn test_out_of_range_answer_is_wrong() {
        let quiz = quiz(&[false, true]);
        assert!(quiz.is_correct(1));
        assert!(!quiz.is_correct(0));
        assert!(!quiz.is_correct(99));
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {
                "image": "one.jpeg",
                "quiz": {
                    "question": "Pick b",
                    "options": [
                        { "text": "a", "correct": false },
                        { "text": "b", "correct": true }
                    ]
                }
            }
        ]"#;
        let catalog = LevelCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().image.as_str(), "one.jpeg");
        assert_eq!(catalog.get(0).unwrap().quiz.correct_option(), Some(1));
    }

    #[test]
    fn test_catalog_from_json_rejects_malformed_quiz() {
        let json = r#"[
            {
                "image": "one.jpeg",
                "quiz": {
                    "question": "No right answer",
                    "options": [ { "text": "a", "correct": false } ]
                }
            }
        ]"#;
        assert!(LevelCatalog::from_json(json).is_err());
    }
}
