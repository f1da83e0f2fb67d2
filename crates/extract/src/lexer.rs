//! Free-text cell lexer.
//!
//! Type, parity, teacher and room move around between rows of the source
//! sheet, so each is recognized by its own lexical signature instead of by
//! position:
//!
//! 1. **Type**: a bracketed marker such as `(Лекционные)`, stripped from the
//!    text.
//! 2. **Parity**: a bracketed week marker such as `(нечет.)` or
//!    `(II нед.)`, stripped too. The whole bracket must be the marker, so
//!    `(Четверг)` stays in the text.
//! 3. **Teacher**: the first `Surname X.Y.` token pair. Tokens before it are
//!    the subject; a cell that opens with the teacher has an empty subject.
//! 4. **Room**: the first token of the *original* text shaped like `Л-550`
//!    or `Б1135`.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{LessonType, WeekParity};
use crate::error::ExtractError;

static ODD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\(\s*(?:(?:неч[её]т(?:\.|н\p{L}*)?|odd)(?:\s+(?:нед(?:\.|\p{L}*)|weeks?))?|I\s+нед(?:\.|\p{L}*))\s*\)",
    )
    .expect("odd marker regex is valid")
});
static EVEN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\(\s*(?:(?:ч[её]т(?:\.|н\p{L}*)?|even)(?:\s+(?:нед(?:\.|\p{L}*)|weeks?))?|II\s+нед(?:\.|\p{L}*))\s*\)",
    )
    .expect("even marker regex is valid")
});
static SURNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Lu}\p{Ll}+(?:-\p{Lu}?\p{Ll}+)*$").expect("surname regex is valid")
});
static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}\.\p{Lu}\.$").expect("initials regex is valid"));
static ROOM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}{1,2}-?\d+\p{L}?$").expect("room regex is valid"));

/// Cell text treated as noise rather than a lesson.
const NOISE: &str = "1";

/// Bracketed type markers recognized by the lexer.
///
/// Markers are matched case-insensitively inside parentheses, with
/// optional surrounding whitespace. Lecture markers are tried first, then
/// practice, then lab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    lecture: Vec<String>,
    practice: Vec<String>,
    lab: Vec<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            lecture: vec!["Лекционные".into(), "Лекция".into(), "Lecture".into()],
            practice: vec!["Практические".into(), "Практика".into(), "Practice".into()],
            lab: vec!["Лабораторные".into(), "Лабораторная".into(), "Lab".into()],
        }
    }
}

impl LexerConfig {
    /// Replaces the lecture markers.
    pub fn with_lecture_markers(mut self, markers: Vec<String>) -> Self {
        self.lecture = markers;
        self
    }

    /// Replaces the practice markers.
    pub fn with_practice_markers(mut self, markers: Vec<String>) -> Self {
        self.practice = markers;
        self
    }

    /// Replaces the lab markers.
    pub fn with_lab_markers(mut self, markers: Vec<String>) -> Self {
        self.lab = markers;
        self
    }

    /// Markers for one lesson type, or an empty slice for `Generic`.
    pub fn markers(&self, kind: LessonType) -> &[String] {
        match kind {
            LessonType::Lecture => &self.lecture,
            LessonType::Practice => &self.practice,
            LessonType::Lab => &self.lab,
            LessonType::Generic => &[],
        }
    }
}

/// Structured view of one occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexResult {
    /// Subject name with whitespace collapsed.
    pub subject: String,
    /// Lesson kind.
    pub kind: LessonType,
    /// Teacher as "Surname X.Y.", if found.
    pub teacher: Option<String>,
    /// Room code, if found.
    pub room: Option<String>,
    /// Week parity.
    pub parity: WeekParity,
}

/// Compiled lexer. Holds no per-cell state.
#[derive(Debug, Clone)]
pub struct CellLexer {
    type_markers: Vec<(LessonType, Regex)>,
}

impl CellLexer {
    /// Compiles the type markers of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if a marker is blank.
    pub fn new(config: &LexerConfig) -> Result<Self, ExtractError> {
        let mut type_markers = Vec::new();
        for kind in [LessonType::Lecture, LessonType::Practice, LessonType::Lab] {
            let markers = config.markers(kind);
            if markers.is_empty() {
                continue;
            }
            if markers.iter().any(|m| m.trim().is_empty()) {
                return Err(ExtractError::InvalidConfig {
                    reason: format!("blank {kind:?} marker"),
                });
            }
            let alternatives: Vec<String> =
                markers.iter().map(|m| regex::escape(m.trim())).collect();
            let pattern = format!(r"(?i)\(\s*(?:{})\s*\)", alternatives.join("|"));
            let re = Regex::new(&pattern).map_err(|e| ExtractError::InvalidConfig {
                reason: e.to_string(),
            })?;
            type_markers.push((kind, re));
        }
        Ok(Self { type_markers })
    }

    /// Lexes one cell. Returns `None` for blank cells and the `"1"` noise
    /// value.
    pub fn lex(&self, text: &str) -> Option<LexResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == NOISE {
            return None;
        }

        let (kind, rest) = self.extract_type(trimmed);
        let (parity, rest) = extract_parity(&rest);
        let (subject, teacher) = split_teacher(&rest);

        Some(LexResult {
            subject,
            kind,
            teacher,
            room: find_room(trimmed),
            parity,
        })
    }

    fn extract_type(&self, text: &str) -> (LessonType, String) {
        for (kind, re) in &self.type_markers {
            if re.is_match(text) {
                return (*kind, re.replacen(text, 1, " ").into_owned());
            }
        }
        (LessonType::Generic, text.to_string())
    }
}

impl Default for CellLexer {
    fn default() -> Self {
        Self::new(&LexerConfig::default()).expect("default markers are valid")
    }
}

fn extract_parity(text: &str) -> (WeekParity, String) {
    if ODD_MARKER.is_match(text) {
        (WeekParity::Odd, ODD_MARKER.replacen(text, 1, " ").into_owned())
    } else if EVEN_MARKER.is_match(text) {
        (WeekParity::Even, EVEN_MARKER.replacen(text, 1, " ").into_owned())
    } else {
        (WeekParity::All, text.to_string())
    }
}

/// Splits `text` at the first `Surname X.Y.` pair. Tokens after the pair
/// are dropped.
fn split_teacher(text: &str) -> (String, Option<String>) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let found = tokens
        .windows(2)
        .position(|pair| SURNAME.is_match(pair[0]) && INITIALS.is_match(pair[1]));

    match found {
        Some(i) => (
            tokens[..i].join(" "),
            Some(format!("{} {}", tokens[i], tokens[i + 1])),
        ),
        None => (tokens.join(" "), None),
    }
}

fn find_room(text: &str) -> Option<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| matches!(c, ',' | ';' | '(' | ')')))
        .find(|t| ROOM.is_match(t))
        .map(str::to_string)
}
