//! tabledef literal - Show how a JSON value is classified and rendered

use crate::render::{SqlValue, escape, kind_of};
use crate::schema::Kind;
use anyhow::{Context, Result};

pub fn describe_literal(json: &str) -> Result<(Kind, String)> {
    let value: serde_json::Value =
        serde_json::from_str(json).with_context(|| format!("Invalid JSON value: {}", json))?;
    let value = SqlValue::from(value);
    Ok((kind_of(&value), escape(&value)))
}

pub fn cmd_literal(json: &str) -> Result<()> {
    let (kind, literal) = describe_literal(json)?;
    println!("kind: {}", kind);
    println!("literal: {}", literal);
    Ok(())
}
