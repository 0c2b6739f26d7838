use serde::{Deserialize, Serialize};

/// Upper bound on the results returned by a single search.
pub const MAX_RESULTS: usize = 10;
/// Only the first entries of `RelatedTopics` are inspected.
pub const MAX_RELATED_TOPICS: usize = 10;
/// Only the first entries of a nested `Topics` group are inspected.
pub const MAX_SUBTOPICS: usize = 5;

pub const DEFAULT_ABSTRACT_TITLE: &str = "Summary";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl SearchResult {
    pub fn new(title: String, url: String, snippet: Option<String>) -> SearchResult {
        SearchResult {
            title,
            url,
            snippet,
        }
    }

    /// Related topics carry a single text used as both title and snippet.
    fn from_topic_text(text: &str, url: &str) -> SearchResult {
        SearchResult::new(text.to_string(), url.to_string(), Some(text.to_string()))
    }
}

/// The part of the instant answer payload we read. Everything else is ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InstantAnswer {
    #[serde(rename = "Heading")]
    pub heading: Option<String>,
    #[serde(rename = "AbstractText")]
    pub abstract_text: Option<String>,
    #[serde(rename = "AbstractURL")]
    pub abstract_url: Option<String>,
    #[serde(rename = "RelatedTopics")]
    pub related_topics: Option<Vec<RelatedTopic>>,
}

/// Either a flat text + link pair, or a named group holding more of them.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RelatedTopic {
    #[serde(rename = "Text")]
    pub text: Option<String>,
    #[serde(rename = "FirstURL")]
    pub first_url: Option<String>,
    #[serde(rename = "Topics")]
    pub topics: Option<Vec<RelatedTopic>>,
}

impl RelatedTopic {
    fn as_result(&self) -> Option<SearchResult> {
        match (&self.text, &self.first_url) {
            (Some(text), Some(url)) => Some(SearchResult::from_topic_text(text, url)),
            _ => None,
        }
    }
}

/// Turns a decoded payload into at most [`MAX_RESULTS`] results.
///
/// The abstract, when it has text, always comes first. Related topics follow
/// in array order; a group contributes its own valid entries in place.
pub fn extract_results(answer: &InstantAnswer) -> Vec<SearchResult> {
    let mut results = Vec::new();

    if let Some(text) = answer.abstract_text.as_deref().filter(|t| !t.is_empty()) {
        results.push(SearchResult::new(
            answer
                .heading
                .clone()
                .unwrap_or_else(|| DEFAULT_ABSTRACT_TITLE.to_string()),
            answer.abstract_url.clone().unwrap_or_default(),
            Some(text.to_string()),
        ));
    }

    if let Some(topics) = &answer.related_topics {
        for topic in topics.iter().take(MAX_RELATED_TOPICS) {
            if let Some(result) = topic.as_result() {
                results.push(result);
            } else if let Some(subtopics) = &topic.topics {
                results.extend(
                    subtopics
                        .iter()
                        .take(MAX_SUBTOPICS)
                        .filter_map(RelatedTopic::as_result),
                );
            }
        }
    }

    results.truncate(MAX_RESULTS);
    results
}
