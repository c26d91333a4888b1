use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;

/// A decoded form submission: field name -> field value.
///
/// A repeated field name keeps the last occurrence only.
pub type FormMessage = BTreeMap<String, String>;

/// Decodes one URL-encoded payload into a [`FormMessage`].
///
/// Fails on non-UTF-8 input and on any segment lacking an `=` separator; a
/// single malformed segment aborts the whole parse.
pub fn parse_form(payload: &[u8]) -> Result<FormMessage> {
    let text = std::str::from_utf8(payload).context("form payload is not valid UTF-8")?;

    let mut fields = FormMessage::new();
    for segment in text.split('&') {
        let Some((name, value)) = segment.split_once('=') else {
            bail!("form segment {:?} has no '=' separator", segment);
        };
        fields.insert(decode_component(name)?, decode_component(value)?);
    }

    Ok(fields)
}

fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)
        .with_context(|| format!("invalid percent-encoding in {:?}", raw))?;
    Ok(decoded.into_owned())
}
