//! Message body construction
//!
//! Percent-style template substitution, optional JSON rendering of
//! arguments, the user-id prefix, and length truncation. Substitution
//! failures never surface to the caller: the record is emitted with a
//! fallback body instead, because a log call must not disappear over a
//! malformed template.

use crate::core::args::{LogArg, UserContext};
use crate::core::error::{LogError, Result};

/// Marker appended to bodies cut short for exceeding the length limit.
pub const TRUNCATION_SUFFIX: &str = "...[truncated]";

/// Build the final message body for a record.
///
/// Pipeline: substitute args into the template (JSON-rendering them first
/// when `json_format`), prefix the recognized user id, then truncate. A
/// substitution failure degrades to `"<template>" (format error: <detail>)`
/// and the rest of the pipeline still runs.
pub fn render_body(
    template: &str,
    args: &[LogArg],
    user_context: Option<&UserContext>,
    json_format: bool,
    truncate: bool,
    truncate_length: usize,
) -> String {
    let mut body = match render_message(template, args, json_format) {
        Ok(body) => body,
        Err(err) => fallback_body(template, &err),
    };

    if let Some(uid) = user_context.and_then(UserContext::uid) {
        body = format!("{}: {}", uid, body);
    }

    if truncate {
        body = truncate_chars(&body, truncate_length);
    }

    body
}

/// Substitute `args` into `template`.
///
/// A template with no arguments passes through untouched, percent signs and
/// all. With `json_format`, every argument is first independently serialized
/// to its JSON representation and substitutes as a string.
pub fn render_message(template: &str, args: &[LogArg], json_format: bool) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    if json_format {
        let converted = args
            .iter()
            .map(|arg| arg.to_json_string().map(LogArg::Str))
            .collect::<Result<Vec<_>>>()?;
        substitute(template, &converted)
    } else {
        substitute(template, args)
    }
}

/// Positional percent substitution: `%s` takes any variant, `%d` requires an
/// integer, `%f` a float (integers promote), `%%` is a literal percent.
fn substitute(template: &str, args: &[LogArg]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut next_arg = 0usize;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let spec = chars
            .next()
            .ok_or_else(|| LogError::format_mismatch("template ends with a bare '%'"))?;

        if spec == '%' {
            out.push('%');
            continue;
        }

        let arg = args.get(next_arg).ok_or_else(|| {
            LogError::format_mismatch(format!(
                "more placeholders than arguments ({} supplied)",
                args.len()
            ))
        })?;

        match spec {
            's' => out.push_str(&arg.to_string()),
            'd' | 'i' => match arg {
                LogArg::Int(i) => out.push_str(&i.to_string()),
                other => {
                    return Err(LogError::format_mismatch(format!(
                        "argument {} is a {}, '%{}' requires an integer",
                        next_arg + 1,
                        other.kind(),
                        spec
                    )))
                }
            },
            'f' => match arg {
                LogArg::Float(f) => out.push_str(&format!("{:.6}", f)),
                LogArg::Int(i) => out.push_str(&format!("{:.6}", *i as f64)),
                other => {
                    return Err(LogError::format_mismatch(format!(
                        "argument {} is a {}, '%f' requires a number",
                        next_arg + 1,
                        other.kind()
                    )))
                }
            },
            other => {
                return Err(LogError::format_mismatch(format!(
                    "unsupported format specifier '%{}'",
                    other
                )))
            }
        }

        next_arg += 1;
    }

    if next_arg < args.len() {
        return Err(LogError::format_mismatch(format!(
            "more arguments than placeholders ({} unused)",
            args.len() - next_arg
        )));
    }

    Ok(out)
}

/// Fallback body when substitution fails; keeps the raw template visible.
fn fallback_body(template: &str, err: &LogError) -> String {
    let detail = match err {
        LogError::FormatMismatch { message } => message.clone(),
        other => other.to_string(),
    };
    format!("\"{}\" (format error: {})", template, detail)
}

/// Cut `body` so the result, suffix included, is at most `max_len`
/// characters. Counting and cutting are char-aligned, never mid code point.
fn truncate_chars(body: &str, max_len: usize) -> String {
    let total = body.chars().count();
    if total <= max_len {
        return body.to_string();
    }

    let suffix_len = TRUNCATION_SUFFIX.chars().count();
    let keep = max_len.saturating_sub(suffix_len);

    let mut out: String = body.chars().take(keep).collect();
    out.push_str(TRUNCATION_SUFFIX);
    // A limit smaller than the suffix itself still honors the cap.
    if max_len < suffix_len {
        out = out.chars().take(max_len).collect();
    }
    out
}
