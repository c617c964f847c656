//! Google-style doc block parsing.
//!
//! A doc block is scanned in two passes: the first splits it into
//! summary, `Args:` and `Returns:` regions on marker lines, the second
//! matches individual parameter names against the lines of the `Args:`
//! region on demand.

use crate::error::SchemaError;

/// Line marking the start of the parameter-description section.
const ARGS_MARKER: &str = "Args:";

/// Line marking the start of the return-description section.
const RETURNS_MARKER: &str = "Returns:";

/// Characters that may follow a parameter name at the start of a
/// description line, tried in order: `q: text`, `q (str): text`,
/// `q(str): text`.
const PARAM_SEPARATORS: [char; 3] = [':', ' ', '('];

/// A parsed doc block: the summary text plus the lines of the `Args:`
/// region.
#[derive(Debug, Clone)]
pub struct DocBlock {
    summary: String,
    arg_lines: Vec<String>,
}

impl DocBlock {
    /// Parses a Google-style doc block.
    ///
    /// The summary is the space-joined sequence of trimmed non-empty
    /// lines before the `Args:` marker. The `Args:` region runs from the
    /// marker to a `Returns:` marker or the end of the text.
    ///
    /// # Errors
    ///
    /// [`SchemaError::MissingDocumentation`] when `text` is empty or
    /// blank, [`SchemaError::MissingArgsSection`] when no `Args:` marker
    /// line is present. Both errors name `function`.
    pub fn parse(function: &str, text: &str) -> Result<Self, SchemaError> {
        if text.trim().is_empty() {
            return Err(SchemaError::missing_documentation(function));
        }

        let mut summary_lines = Vec::new();
        let mut arg_lines = Vec::new();
        let mut in_args = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if !in_args {
                if trimmed.starts_with(ARGS_MARKER) {
                    in_args = true;
                } else if !trimmed.is_empty() {
                    summary_lines.push(trimmed);
                }
            } else {
                if trimmed.starts_with(RETURNS_MARKER) {
                    break;
                }
                if !trimmed.is_empty() {
                    arg_lines.push(trimmed.to_string());
                }
            }
        }

        if !in_args {
            return Err(SchemaError::missing_args_section(function));
        }

        Ok(Self {
            summary: summary_lines.join(" "),
            arg_lines,
        })
    }

    /// Returns the summary text.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the description for a declared parameter, or `None` when
    /// no line of the `Args:` region describes it.
    ///
    /// The first line whose trimmed text starts with the parameter name
    /// followed by one of the accepted separators wins; the description
    /// is the text after the first colon on that line, trimmed. A
    /// matching line without a colon carries no description.
    #[must_use]
    pub fn param_description(&self, name: &str) -> Option<String> {
        self.arg_lines
            .iter()
            .find(|line| matches_param(line, name))
            .and_then(|line| line.split_once(':'))
            .map(|(_, description)| description.trim().to_string())
    }
}

fn matches_param(line: &str, name: &str) -> bool {
    line.strip_prefix(name)
        .is_some_and(|rest| PARAM_SEPARATORS.iter().any(|sep| rest.starts_with(*sep)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
        Add two numbers together.\n\
        Works on integers.\n\
        \n\
        Args:\n\
            a: The first number\n\
            b (int): The second number\n\
        \n\
        Returns:\n\
            int: The sum\n";

    #[test]
    fn summary_joins_lines_before_args() {
        let block = DocBlock::parse("add", DOC).unwrap();
        assert_eq!(block.summary(), "Add two numbers together. Works on integers.");
    }

    #[test]
    fn descriptions_for_all_three_prefix_variants() {
        let doc = "Sum.\n\nArgs:\n    a: plain colon\n    b (int): parenthesized\n    c(str): tight parens\n";
        let block = DocBlock::parse("sum", doc).unwrap();
        assert_eq!(block.param_description("a").unwrap(), "plain colon");
        assert_eq!(block.param_description("b").unwrap(), "parenthesized");
        assert_eq!(block.param_description("c").unwrap(), "tight parens");
    }

    #[test]
    fn returns_section_is_excluded_from_args_region() {
        let block = DocBlock::parse("add", DOC).unwrap();
        // "int: The sum" lives in the Returns region and must not leak
        assert!(block.param_description("int").is_none());
    }

    #[test]
    fn missing_parameter_yields_none() {
        let block = DocBlock::parse("add", DOC).unwrap();
        assert!(block.param_description("c").is_none());
    }

    #[test]
    fn name_prefix_does_not_match_longer_names() {
        let doc = "Doc.\n\nArgs:\n    ab: described\n";
        let block = DocBlock::parse("f", doc).unwrap();
        assert!(block.param_description("a").is_none());
        assert_eq!(block.param_description("ab").unwrap(), "described");
    }

    #[test]
    fn matching_line_without_colon_has_no_description() {
        let doc = "Doc.\n\nArgs:\n    a the description never got a colon\n";
        let block = DocBlock::parse("f", doc).unwrap();
        assert!(block.param_description("a").is_none());
    }

    #[test]
    fn empty_text_is_missing_documentation() {
        let err = DocBlock::parse("f", "   \n  ").unwrap_err();
        assert!(matches!(err, SchemaError::MissingDocumentation { function } if function == "f"));
    }

    #[test]
    fn text_without_args_marker_is_missing_section() {
        let err = DocBlock::parse("f", "Just a summary.").unwrap_err();
        assert!(matches!(err, SchemaError::MissingArgsSection { function } if function == "f"));
    }

    #[test]
    fn args_region_runs_to_end_without_returns() {
        let doc = "Doc.\n\nArgs:\n    a: first\n    b: second";
        let block = DocBlock::parse("f", doc).unwrap();
        assert_eq!(block.param_description("b").unwrap(), "second");
    }
}
