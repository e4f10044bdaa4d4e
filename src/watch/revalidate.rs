// src/watch/revalidate.rs

use tracing::{info, warn};

use crate::document::parse_document;
use crate::report::Report;
use crate::validate::Validator;
use crate::watch::hash::ContentMemo;

/// What happened when a new version of the document was seen.
#[derive(Debug)]
pub enum Revalidation {
    /// Same bytes as last time; nothing was validated.
    Unchanged,
    /// The document parsed and was validated.
    Validated(Report),
    /// The document could not be turned into a snapshot (bad JSON, duplicate
    /// ids). Watching should continue.
    Unreadable(String),
}

/// Pure core of watch mode: document contents in, report out.
#[derive(Debug)]
pub struct Revalidator {
    validator: Validator,
    memo: ContentMemo,
}

impl Revalidator {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            memo: ContentMemo::new(),
        }
    }

    pub fn process(&mut self, contents: &str) -> Revalidation {
        if !self.memo.observe(contents.as_bytes()) {
            return Revalidation::Unchanged;
        }

        match parse_document(contents) {
            Ok(graph) => {
                let report = Report::build(&graph, &self.validator);
                info!(
                    valid = report.is_valid(),
                    errors = report.validation.errors.len(),
                    "re-validated pipeline document"
                );
                Revalidation::Validated(report)
            }
            Err(err) => {
                warn!("document could not be parsed: {err}");
                Revalidation::Unreadable(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{ "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
                             "edges": [{ "id": "e", "source": "a", "target": "b" }] }"#;
    const CYCLIC: &str = r#"{ "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
                              "edges": [{ "id": "e1", "source": "a", "target": "b" },
                                        { "id": "e2", "source": "b", "target": "a" }] }"#;

    #[test]
    fn validates_only_when_contents_change() {
        let mut r = Revalidator::new(Validator::default());

        match r.process(VALID) {
            Revalidation::Validated(report) => assert!(report.is_valid()),
            other => panic!("expected report, got {other:?}"),
        }
        assert!(matches!(r.process(VALID), Revalidation::Unchanged));

        match r.process(CYCLIC) {
            Revalidation::Validated(report) => assert!(report.stats.has_cycles),
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn broken_document_is_reported_once_and_recovers() {
        let mut r = Revalidator::new(Validator::default());

        assert!(matches!(r.process("{ \"nodes\": "), Revalidation::Unreadable(_)));
        assert!(matches!(r.process("{ \"nodes\": "), Revalidation::Unchanged));
        assert!(matches!(r.process(VALID), Revalidation::Validated(_)));
    }
}
