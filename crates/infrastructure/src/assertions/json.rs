//! JSON parsing and structural equivalence.

use serde::Deserialize;
use serde_json::{Number, Value};
use thiserror::Error;

/// Deepest array/object nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 10_000;

/// Errors from [`parse`].
#[derive(Debug, Error)]
pub enum JsonError {
    /// The document nests arrays or objects deeper than [`MAX_DEPTH`].
    #[error("nesting depth {depth} exceeds the maximum of {max}")]
    TooDeep {
        /// Nesting depth found in the input.
        depth: usize,
        /// The limit that was exceeded.
        max: usize,
    },

    /// The input is not valid JSON.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
}

/// Parses a JSON document nested up to [`MAX_DEPTH`] levels.
///
/// The parser grows its stack on demand, so deep documents do not hit
/// `serde_json`'s default recursion limit of 128.
///
/// # Errors
///
/// Returns [`JsonError::TooDeep`] past the depth limit and
/// [`JsonError::Syntax`] for malformed input.
pub fn parse(input: &str) -> Result<Value, JsonError> {
    let depth = nesting_depth(input);
    if depth > MAX_DEPTH {
        return Err(JsonError::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }

    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Deepest bracket nesting outside string literals.
fn nesting_depth(input: &str) -> usize {
    let mut depth = 0_usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;

    for byte in input.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Returns true if two JSON values are equivalent.
///
/// Object key order is irrelevant and numbers compare by value, so `1` and
/// `1.0` are equivalent. Walks both trees with an explicit stack.
#[must_use]
pub fn equivalent(left: &Value, right: &Value) -> bool {
    let mut pending = vec![(left, right)];

    while let Some((left, right)) = pending.pop() {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => {
                if !numbers_equal(l, r) {
                    return false;
                }
            }
            (Value::Array(l), Value::Array(r)) => {
                if l.len() != r.len() {
                    return false;
                }
                pending.extend(l.iter().zip(r));
            }
            (Value::Object(l), Value::Object(r)) => {
                if l.len() != r.len() {
                    return false;
                }
                for (key, l) in l {
                    let Some(r) = r.get(key) else {
                        return false;
                    };
                    pending.push((l, r));
                }
            }
            _ => {
                if left != right {
                    return false;
                }
            }
        }
    }
    true
}

#[allow(clippy::float_cmp)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}
