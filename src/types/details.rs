//! Full-chain rendering.

use crate::query;
use crate::types::Error;
use std::borrow::Cow;

/// Layout of the full-details rendering.
///
/// The default produces the canonical format: one `<type>: <message>` line
/// per chain node, each followed by that node's stack trace indented by four
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsConfig {
    /// Prefix put in front of every stack-trace line.
    pub indent: Cow<'static, str>,
    /// Put between chain nodes and between a node and its trace.
    pub separator: Cow<'static, str>,
    /// Whether stack traces are rendered at all.
    pub show_stack_traces: bool,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self { indent: Cow::Borrowed("    "), separator: Cow::Borrowed("\n"), show_stack_traces: true }
    }
}

impl DetailsConfig {
    /// Type and message of each node, no stack traces.
    #[inline]
    pub fn compact() -> Self {
        Self { show_stack_traces: false, ..Default::default() }
    }

    /// Sets the prefix of stack-trace lines.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the text put between lines.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Turns stack traces on or off.
    #[must_use]
    pub fn show_stack_traces(mut self, show: bool) -> Self {
        self.show_stack_traces = show;
        self
    }

    /// Renders `err` and all of its causes.
    pub fn render(&self, err: &Error) -> String {
        let mut result = String::new();

        for node in query::chain(err) {
            if !result.is_empty() {
                result.push_str(&self.separator);
            }
            result.push_str(&format!("{}: {}", query::get_type(node), node));

            if !self.show_stack_traces {
                continue;
            }
            let stack_trace = query::get_stack_trace(node);
            if stack_trace.is_empty() {
                continue;
            }
            for line in stack_trace.split('\n') {
                result.push_str(&self.separator);
                result.push_str(&self.indent);
                result.push_str(line);
            }
        }

        result
    }
}
