//! Error types for litfix-edit.
//!
//! Every variant here signals a bug in rule authoring or a caller handing
//! in spans that do not belong to the text, never a normal "nothing to
//! fix" outcome (that is an empty edit list).

use litfix_types::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Two edits claim intersecting byte ranges. Fatal for the file's fix
    /// operation; silently dropping one would corrupt the output.
    #[error("overlapping edits at {first} and {second}")]
    Overlap { first: Span, second: Span },

    /// An edit span reaches past the end of the text.
    #[error("edit span {span} out of bounds for text of {len} bytes")]
    OutOfBounds { span: Span, len: usize },

    /// An edit span splits a multi-byte character.
    #[error("edit span {span} does not fall on character boundaries")]
    Misaligned { span: Span },
}

impl EditError {
    /// Recommended process exit code. Overlap and misuse are always fatal
    /// for the fix run.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_names_both_spans() {
        let err = EditError::Overlap {
            first: Span::new(0, 4),
            second: Span::new(2, 4),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("0..4"));
        assert!(err.to_string().contains("2..6"));
    }
}
