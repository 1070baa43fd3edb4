use super::tokenizer::{tokenize_query, tokenize_text};
use crate::schema::types::Entity;

/// Minimum score for an entity to appear in the result set.
const MATCH_THRESHOLD: f32 = 0.6;
/// Description hits rank slightly below equivalent name hits.
const DESCRIPTION_WEIGHT: f32 = 0.9;
/// Fuzzy word similarity is scaled below the exact-match tiers so a close
/// variant never outranks a literal match.
const FUZZY_WEIGHT: f32 = 0.9;

const EXACT_FIELD_SCORE: f32 = 1.0;
const EXACT_WORD_SCORE: f32 = 0.95;
const SUBSTRING_SCORE: f32 = 0.85;

/// A ranked match: position into the entity list the index was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub position: usize,
    pub score: f32,
}

struct FieldText {
    text: String,
    words: Vec<String>,
}

impl FieldText {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_lowercase(),
            words: tokenize_text(text),
        }
    }
}

struct IndexEntry {
    name: FieldText,
    description: Option<FieldText>,
}

/// Immutable fuzzy index over the `name` and `description` fields of an entity
/// list. Built once per reload cycle; positions refer to that list.
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn build(entities: &[Entity]) -> Self {
        let entries = entities
            .iter()
            .map(|entity| IndexEntry {
                name: FieldText::new(&entity.name),
                description: entity.description.as_deref().map(FieldText::new),
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked matches for a query string, best first.
    ///
    /// Deterministic: ties break on position, and scoring is pure, so the same
    /// index and query always produce the same ordering.
    pub fn query(&self, text: &str) -> Vec<Hit> {
        let tokens = tokenize_query(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for (position, entry) in self.entries.iter().enumerate() {
            let mut score = score_field(&entry.name, &tokens);
            if let Some(description) = &entry.description {
                score = score.max(score_field(description, &tokens) * DESCRIPTION_WEIGHT);
            }

            if score >= MATCH_THRESHOLD {
                hits.push(Hit { position, score });
            }
        }

        hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.position.cmp(&b.position)));
        hits
    }
}

fn score_field(field: &FieldText, tokens: &[String]) -> f32 {
    let total: f32 = tokens.iter().map(|token| score_token(field, token)).sum();
    total / tokens.len() as f32
}

fn score_token(field: &FieldText, token: &str) -> f32 {
    if field.text == token {
        return EXACT_FIELD_SCORE;
    }
    if field.words.iter().any(|word| word == token) {
        return EXACT_WORD_SCORE;
    }
    if field.text.contains(token) {
        return SUBSTRING_SCORE;
    }

    let best = field
        .words
        .iter()
        .map(|word| strsim::jaro_winkler(token, word) as f32)
        .fold(0.0, f32::max);

    best * FUZZY_WEIGHT
}
