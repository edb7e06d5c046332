// SPDX-License-Identifier: MPL-2.0
//! Decoding of `generateContent` responses.

use crate::application::port::LocationError;
use crate::domain::content::copy;
use crate::domain::location::{LocationReport, MapPlace};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapsChunk {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
    place_answer_sources: Option<OneOrMany<PlaceAnswerSources>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceAnswerSources {
    #[serde(default)]
    review_snippets: Vec<ReviewSnippet>,
}

#[derive(Debug, Default, Deserialize)]
struct ReviewSnippet {
    content: Option<String>,
    review: Option<String>,
}

/// The service has shipped `placeAnswerSources` both as an object and as a
/// list of objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.first(),
        }
    }
}

/// Parses a raw response body into a [`LocationReport`].
///
/// The summary is the concatenated text of the first candidate (or a fixed
/// notice when it has none); the place is taken from the first grounding
/// chunk that carries map data.
pub fn parse_response(body: &str) -> Result<LocationReport, LocationError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| LocationError::Decode(e.to_string()))?;

    let candidate = response.candidates.into_iter().next().unwrap_or_default();

    let summary: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    let summary = if summary.trim().is_empty() {
        copy::location::SUMMARY_UNAVAILABLE.to_string()
    } else {
        summary
    };

    let place = candidate
        .grounding_metadata
        .unwrap_or_default()
        .grounding_chunks
        .into_iter()
        .filter_map(|chunk| chunk.maps)
        // A place without a link cannot be opened.
        .find(|maps| !maps.uri.trim().is_empty())
        .map(|maps| {
            let review_snippet = maps
                .place_answer_sources
                .as_ref()
                .and_then(OneOrMany::first)
                .and_then(|sources| sources.review_snippets.first())
                .and_then(|snippet| snippet.content.clone().or_else(|| snippet.review.clone()));
            MapPlace {
                uri: maps.uri,
                title: maps.title,
                review_snippet,
            }
        });

    Ok(LocationReport { summary, place })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_MAPS: &str = r#"{
      "candidates": [{
        "content": { "role": "model", "parts": [
          { "text": "Endereço confirmado: " },
          { "text": "R. Papa João Paulo II, 4000." }
        ]},
        "groundingMetadata": { "groundingChunks": [
          { "web": { "uri": "https://example.test", "title": "Web" } },
          { "maps": {
              "uri": "https://maps.google.com/?cid=123",
              "title": "Vertical Cor",
              "placeId": "places/abc",
              "placeAnswerSources": [{ "reviewSnippets": [{ "content": "Serviço impecável!" }] }]
          }}
        ]}
      }]
    }"#;

    #[test]
    fn maps_chunk_becomes_place() {
        let report = parse_response(WITH_MAPS).unwrap();
        assert_eq!(report.summary, "Endereço confirmado: R. Papa João Paulo II, 4000.");
        let place = report.place().unwrap();
        assert_eq!(place.uri, "https://maps.google.com/?cid=123");
        assert_eq!(place.title, "Vertical Cor");
        assert_eq!(place.review_snippet.as_deref(), Some("Serviço impecável!"));
    }

    #[test]
    fn object_shaped_answer_sources_are_accepted() {
        let body = r#"{ "candidates": [{ "groundingMetadata": { "groundingChunks": [
            { "maps": { "uri": "u", "title": "t",
                "placeAnswerSources": { "reviewSnippets": [{ "review": "Ótimo" }] } } }
        ]}}]}"#;
        let report = parse_response(body).unwrap();
        assert_eq!(
            report.place().and_then(|p| p.review_snippet.as_deref()),
            Some("Ótimo")
        );
    }

    #[test]
    fn maps_chunk_without_uri_is_skipped() {
        let body = r#"{ "candidates": [{ "groundingMetadata": { "groundingChunks": [
            { "maps": { "title": "Sem link" } },
            { "maps": { "uri": "  ", "title": "Em branco" } }
        ]}}]}"#;
        let report = parse_response(body).unwrap();
        assert!(report.place().is_none());
    }

    #[test]
    fn first_linked_maps_chunk_wins() {
        let body = r#"{ "candidates": [{ "groundingMetadata": { "groundingChunks": [
            { "maps": { "title": "Sem link" } },
            { "maps": { "uri": "https://maps.google.com/?cid=7", "title": "Vertical Cor" } }
        ]}}]}"#;
        let report = parse_response(body).unwrap();
        assert_eq!(
            report.place().map(|p| p.uri.as_str()),
            Some("https://maps.google.com/?cid=7")
        );
    }

    #[test]
    fn web_only_chunks_yield_no_place() {
        let body = r#"{ "candidates": [{
            "content": { "parts": [{ "text": "Somente web" }] },
            "groundingMetadata": { "groundingChunks": [{ "web": { "uri": "u", "title": "t" } }] }
        }]}"#;
        let report = parse_response(body).unwrap();
        assert_eq!(report.summary, "Somente web");
        assert!(report.place().is_none());
    }

    #[test]
    fn empty_response_uses_unavailable_notice() {
        let report = parse_response("{}").unwrap();
        assert_eq!(report.summary, copy::location::SUMMARY_UNAVAILABLE);
        assert!(report.place.is_none());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = parse_response("<html>").unwrap_err();
        assert!(matches!(err, LocationError::Decode(_)));
    }
}
