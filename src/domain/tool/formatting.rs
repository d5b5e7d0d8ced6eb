//! Text rendering for tool outputs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::knowledge_base::KnowledgeBase;
use crate::domain::retrieval::RetrievedChunk;

pub const SEARCH_STARTED_STATUS: &str = "Searching knowledge bases...";
pub const NO_RESULTS_STATUS: &str = "No relevant knowledge found";
pub const NO_KNOWLEDGE_BASES_MESSAGE: &str = "No knowledge bases are currently available.";
pub const NO_DESCRIPTION: &str = "No description";

const RESPONSE_PREAMBLE: &str = "Here is the relevant information from the knowledge bases:";
const CITATION_INSTRUCTIONS: &str = "Use the information above to answer the user's question. \
When referencing specific information, include inline citations using [1], [2], etc., \
corresponding to the source IDs in the <source> tags. Do not include the XML tags in your response.";
const LISTING_HEADER: &str = "Available knowledge bases:\n";

static SOURCE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<source id="(\d+)""#).unwrap());

/// Status shown once results have been gathered
pub fn found_status(count: usize) -> String {
    format!("Found {} relevant documents", count)
}

/// Response for a search that returned nothing
pub fn no_results_message(query: &str) -> String {
    format!(
        "No relevant information found in the knowledge bases for query: '{}'",
        query
    )
}

/// Display name for the chunk at 1-based position `citation_id`
pub fn display_name(chunk: &RetrievedChunk, citation_id: usize) -> String {
    chunk
        .source_name()
        .unwrap_or_else(|| format!("Source {}", citation_id))
}

/// A single tagged source block
pub fn source_block(citation_id: usize, name: &str, document: &str) -> String {
    format!(
        "<source id=\"{}\" name=\"{}\">{}</source>",
        citation_id, name, document
    )
}

/// Render retrieved chunks as a citation-tagged context section
///
/// Citation IDs are 1-based and follow the order of `chunks`.
pub fn format_search_response(chunks: &[RetrievedChunk]) -> String {
    let blocks: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let citation_id = i + 1;
            source_block(citation_id, &display_name(chunk, citation_id), &chunk.document)
        })
        .collect();

    format!(
        "{}\n\n<context>\n{}\n</context>\n\n{}",
        RESPONSE_PREAMBLE,
        blocks.join("\n\n"),
        CITATION_INSTRUCTIONS
    )
}

/// Render the catalog as a markdown list
pub fn format_knowledge_base_listing(knowledge_bases: &[KnowledgeBase]) -> String {
    if knowledge_bases.is_empty() {
        return NO_KNOWLEDGE_BASES_MESSAGE.to_string();
    }

    let mut lines = vec![LISTING_HEADER.to_string()];

    for kb in knowledge_bases {
        // Whitespace-only descriptions count as missing
        let description = kb
            .description()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION);

        lines.push(format!(
            "- **{}** (ID: `{}`)\n  Description: {}\n  Files: {}",
            kb.name(),
            kb.id(),
            description,
            kb.file_count()
        ));
    }

    lines.join("\n")
}

/// Citation IDs of the `<source>` tags in `text`, in order of appearance
pub fn citation_ids(text: &str) -> Vec<usize> {
    SOURCE_ID_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::{KnowledgeBaseData, KnowledgeBaseId};
    use serde_json::json;

    fn chunk(text: &str, source: Option<&str>) -> RetrievedChunk {
        let chunk = RetrievedChunk::new(text);
        match source {
            Some(source) => chunk.with_metadata("source", json!(source)),
            None => chunk,
        }
    }

    #[test]
    fn test_format_single_result() {
        let output = format_search_response(&[chunk("Vacation is 25 days.", Some("hr.md"))]);

        assert_eq!(
            output,
            "Here is the relevant information from the knowledge bases:\n\n\
             <context>\n\
             <source id=\"1\" name=\"hr.md\">Vacation is 25 days.</source>\n\
             </context>\n\n\
             Use the information above to answer the user's question. When referencing specific \
             information, include inline citations using [1], [2], etc., corresponding to the \
             source IDs in the <source> tags. Do not include the XML tags in your response."
        );
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let output = format_search_response(&[chunk("one", Some("a")), chunk("two", Some("b"))]);

        assert!(output.contains(
            "<source id=\"1\" name=\"a\">one</source>\n\n<source id=\"2\" name=\"b\">two</source>\n</context>"
        ));
    }

    #[test]
    fn test_missing_source_uses_synthetic_name() {
        let output = format_search_response(&[chunk("one", Some("a")), chunk("two", None)]);

        assert!(output.contains("<source id=\"2\" name=\"Source 2\">two</source>"));
    }

    #[test]
    fn test_citation_ids_are_sequential() {
        let chunks: Vec<RetrievedChunk> = (0..7)
            .map(|i| chunk(&format!("chunk {}", i), None))
            .collect();

        let output = format_search_response(&chunks);

        assert_eq!(citation_ids(&output), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_results_message() {
        assert_eq!(
            no_results_message("parental leave"),
            "No relevant information found in the knowledge bases for query: 'parental leave'"
        );
    }

    #[test]
    fn test_listing_renders_fallbacks() {
        let kbs = vec![
            KnowledgeBase::new(KnowledgeBaseId::new("kb-hr").unwrap(), "HR Policies")
                .with_data(KnowledgeBaseData::with_file_ids(["f1", "f2"])),
            KnowledgeBase::new(KnowledgeBaseId::new("kb-eng").unwrap(), "Engineering")
                .with_description("Runbooks")
                .with_data(KnowledgeBaseData::default()),
            KnowledgeBase::new(KnowledgeBaseId::new("kb-legal").unwrap(), "Legal")
                .with_description("Contracts"),
        ];

        let output = format_knowledge_base_listing(&kbs);

        assert_eq!(
            output,
            "Available knowledge bases:\n\n\
             - **HR Policies** (ID: `kb-hr`)\n  Description: No description\n  Files: 2\n\
             - **Engineering** (ID: `kb-eng`)\n  Description: Runbooks\n  Files: 0\n\
             - **Legal** (ID: `kb-legal`)\n  Description: Contracts\n  Files: 0"
        );
    }

    #[test]
    fn test_listing_empty_catalog() {
        assert_eq!(format_knowledge_base_listing(&[]), NO_KNOWLEDGE_BASES_MESSAGE);
    }

    #[test]
    fn test_whitespace_only_description_renders_as_missing() {
        let kbs = vec![
            KnowledgeBase::new(KnowledgeBaseId::new("kb-1").unwrap(), "Docs")
                .with_description("   "),
            KnowledgeBase::new(KnowledgeBaseId::new("kb-2").unwrap(), "Notes").with_description(""),
        ];

        let listing = format_knowledge_base_listing(&kbs);
        assert_eq!(listing.matches("Description: No description").count(), 2);
    }
}
