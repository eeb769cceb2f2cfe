use blocklint_text_size::{TextRange, TextSize};

/// Whether a fix can be applied without changing program behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Applicability {
    /// Safe to apply automatically.
    Safe,
    /// May change behavior; requires opt-in.
    Unsafe,
}

/// A single text replacement: delete the range, insert the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    range: TextRange,
    content: Option<String>,
}

impl Edit {
    /// Replace `range` with `content`.
    pub fn range_replacement(content: String, range: TextRange) -> Self {
        debug_assert!(!content.is_empty(), "an empty replacement is a deletion");
        Self {
            range,
            content: Some(content),
        }
    }

    /// Delete `range`.
    pub fn range_deletion(range: TextRange) -> Self {
        Self {
            range,
            content: None,
        }
    }

    /// Insert `content` at `offset`.
    pub fn insertion(content: String, offset: TextSize) -> Self {
        Self::range_replacement(content, TextRange::empty(offset))
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// One or more edits that together resolve a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    edits: Vec<Edit>,
    applicability: Applicability,
}

impl Fix {
    /// A fix from a single edit that is safe to apply automatically.
    pub fn safe_edit(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applicability: Applicability::Safe,
        }
    }

    /// A fix from multiple safe edits.
    pub fn safe_edits(edits: Vec<Edit>) -> Self {
        Self {
            edits,
            applicability: Applicability::Safe,
        }
    }

    /// A fix from a single edit that may change behavior.
    pub fn unsafe_edit(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applicability: Applicability::Unsafe,
        }
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn applicability(&self) -> Applicability {
        self.applicability
    }
}
