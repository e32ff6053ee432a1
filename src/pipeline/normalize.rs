use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::errors::{PipelineError, Result};

/// Opening or closing code fence, optionally tagged `json`, plus trailing whitespace.
static FENCE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?\s*").ok());

fn strip_fences(text: &str) -> Cow<'_, str> {
    match FENCE_PATTERN.as_ref() {
        Some(re) => re.replace_all(text, ""),
        None => Cow::Owned(text.replace("```", "")),
    }
}

/// Isolate the JSON object inside a model completion.
///
/// Fences are dropped, then everything from the first `{` to the last `}` is
/// kept. Whether that slice is valid JSON is for the parser to decide.
pub fn normalize(raw: &str) -> Result<String> {
    let cleaned = strip_fences(raw);

    let start = cleaned.find('{').ok_or(PipelineError::MalformedResponse)?;
    let end = cleaned.rfind('}').ok_or(PipelineError::MalformedResponse)?;
    if end <= start {
        return Err(PipelineError::MalformedResponse);
    }

    Ok(cleaned[start..=end].trim().to_string())
}
