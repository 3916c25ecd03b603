//! Fuzzy matching implementation for contact lookup.
//!
//! This module provides forgiving contact search with:
//! - Exact matching on ten-digit phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::domain::PhoneNumber;
use crate::models::{AddressBook, Record};
use std::fmt;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.record, self.confidence)
    }
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher over the records of an address book.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query`.
    ///
    /// A query that is a valid phone number matches the records holding that
    /// phone exactly; any query is also matched fuzzily against names.
    ///
    /// # Returns
    /// At most `max_results` matches with confidence at least
    /// `min_confidence`, highest first. Equal scores keep book order.
    pub fn search<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let phone_query = PhoneNumber::is_valid(query);
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in book {
            if phone_query && record.find_phone(query).is_some() {
                results.push(MatchResult {
                    record,
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name().as_str()) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        // Stable sort keeps insertion order among equal scores
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        results.truncate(max_results);

        results
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
