//! Per-line placeholder substitution.
//!
//! Each line of a paragraph is treated as an independent MiniJinja template
//! and rendered against one set of bindings. A line that fails to parse or
//! render keeps its original content, and every failure is collected; the
//! whole paragraph is always processed, so the caller sees every bad line,
//! not just the first.

use std::error::Error;
use std::fmt;

use minijinja::Environment;
use serde::Serialize;

use crate::Paragraph;

/// One line that failed to parse or render.
#[derive(Clone, Debug)]
pub struct LineFailure {
    /// Zero-based index of the failing line in the input paragraph.
    pub line: usize,
    /// The underlying engine error, rendered to text.
    pub message: String,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Aggregated substitution failures, carrying the best-effort output.
///
/// Failing lines keep their original content in [`output`](Self::output),
/// so a caller that wants the partial result and the failure report gets
/// both from the `Err` arm.
#[derive(Debug)]
pub struct SubstituteError {
    output: Paragraph,
    failures: Vec<LineFailure>,
}

impl SubstituteError {
    /// Every line that failed, in input order.
    pub fn failures(&self) -> &[LineFailure] {
        &self.failures
    }

    /// The paragraph with all successful substitutions applied and failing
    /// lines left as they were.
    pub fn output(&self) -> &Paragraph {
        &self.output
    }

    /// Consumes the error, keeping only the best-effort output.
    pub fn into_output(self) -> Paragraph {
        self.output
    }
}

impl fmt::Display for SubstituteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "substitution failed on {} line(s): ", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl Error for SubstituteError {}

impl Paragraph {
    /// Substitutes `{{ name }}` placeholders in every line.
    ///
    /// `bindings` is anything serializable: a struct, a map, a
    /// `serde_json::Value`. Placeholders with no matching binding render as
    /// the empty string. A line whose template is malformed keeps its
    /// original content; if any line failed the result is an error carrying
    /// both the failure list and the best-effort output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::Paragraph;
    /// use serde_json::json;
    ///
    /// let p = Paragraph::from_lines(["Hello {{ name }}!", "{{ count }} items"]);
    /// let out = p.substitute(&json!({"name": "World", "count": 3})).unwrap();
    /// assert_eq!(out.lines(), ["Hello World!", "3 items"]);
    /// ```
    pub fn substitute<S: Serialize>(&self, bindings: &S) -> Result<Paragraph, SubstituteError> {
        let env = Environment::new();
        let mut output = Paragraph::with_capacity(self.len());
        let mut failures = Vec::new();
        for (i, line) in self.iter().enumerate() {
            match env.render_str(line, bindings) {
                Ok(rendered) => output.push(rendered),
                Err(err) => {
                    failures.push(LineFailure {
                        line: i,
                        message: err.to_string(),
                    });
                    output.push(line.clone());
                }
            }
        }
        if failures.is_empty() {
            Ok(output)
        } else {
            Err(SubstituteError { output, failures })
        }
    }

    /// Like [`substitute`](Self::substitute) but discards the failure
    /// report, returning the best-effort output either way.
    pub fn substitute_lossy<S: Serialize>(&self, bindings: &S) -> Paragraph {
        match self.substitute(bindings) {
            Ok(output) => output,
            Err(err) => err.into_output(),
        }
    }
}
