//! Assembles retrieved matches into the context block handed to the
//! answer synthesizer.

use crate::domain::models::RetrievedMatch;

const SEPARATOR: &str = "\n\n---\n\n";

/// Render matches into a numbered context block, best match first.
///
/// Each entry carries its provenance (source document and page) and the
/// retrieval score so the model can weigh conflicting passages. Returns
/// an empty string for an empty slice.
pub fn assemble_context(matches: &[RetrievedMatch]) -> String {
    if matches.is_empty() {
        return String::new();
    }
    let blocks: Vec<String> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "DOCUMENT {number}:\nSource: {source}\nPage: {page}\nRelevance Score: {score:.2}\nContent:\n{text}",
                number = i + 1,
                source = m.chunk.source_document,
                page = m.chunk.page_number,
                score = m.score,
                text = m.chunk.text,
            )
        })
        .collect();
    format!("\n\n{}", blocks.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Chunk;

    fn match_with(text: &str, source: &str, page: u32, score: f32, rank: usize) -> RetrievedMatch {
        RetrievedMatch {
            chunk: Chunk {
                text: text.to_string(),
                source_document: source.to_string(),
                page_number: page,
            },
            score,
            rank,
        }
    }

    #[test]
    fn empty_matches_yield_empty_context() {
        assert_eq!(assemble_context(&[]), "");
    }

    #[test]
    fn single_match_is_numbered_and_scored() {
        let ctx = assemble_context(&[match_with("hello", "guide.pdf", 3, 0.912, 0)]);
        assert!(ctx.starts_with("\n\n"));
        assert!(ctx.contains("DOCUMENT 1:"));
        assert!(ctx.contains("Source: guide.pdf"));
        assert!(ctx.contains("Page: 3"));
        assert!(ctx.contains("Relevance Score: 0.91"));
        assert!(ctx.contains("Content:\nhello"));
    }

    #[test]
    fn matches_are_separated_and_ordered() {
        let ctx = assemble_context(&[
            match_with("first", "a.pdf", 1, 0.9, 0),
            match_with("second", "b.pdf", 2, 0.8, 1),
        ]);
        let first = ctx.find("DOCUMENT 1:").unwrap();
        let second = ctx.find("DOCUMENT 2:").unwrap();
        assert!(first < second);
        assert!(ctx.contains(SEPARATOR));
    }
}
