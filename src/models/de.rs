//! Lenient deserializers for feed payloads.
//!
//! ZeroHero records are loosely typed: ids arrive as numbers or strings, tags as
//! arrays or comma separated strings, and any field may be `null`. None of that
//! is allowed to fail a whole snapshot.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Text(s) => s,
            RawScalar::Bool(b) => b.to_string(),
        }
    }

    fn into_count(self) -> Option<i64> {
        match self {
            RawScalar::Int(i) => Some(i),
            RawScalar::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            RawScalar::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    fn into_price(self) -> Option<f64> {
        match self {
            RawScalar::Int(i) => Some(i as f64),
            RawScalar::Float(f) => Some(f),
            RawScalar::Text(s) => s.trim().trim_start_matches('$').parse::<f64>().ok(),
            RawScalar::Bool(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<Option<RawScalar>>),
    Joined(String),
}

/// `null` or a missing field becomes `T::default()`.
pub fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Identifier given as string or number.
pub fn id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(d)?
        .map(RawScalar::into_text)
        .unwrap_or_default())
}

pub fn opt_id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(d)?
        .map(RawScalar::into_text)
        .filter(|s| !s.trim().is_empty()))
}

/// Text field where `null` and numbers are tolerated.
pub fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id(d)
}

pub fn opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_id(d)
}

/// Integer count; unparseable values are treated as absent.
pub fn opt_count<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(d)?.and_then(RawScalar::into_count))
}

/// Count that defaults to zero and never goes negative.
pub fn count<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_count(d)?.unwrap_or(0).max(0))
}

pub fn opt_price<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawScalar>::deserialize(d)?.and_then(RawScalar::into_price))
}

/// Tags as an array (null entries dropped) or a comma separated string.
pub fn tags<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTags>::deserialize(d)?;
    let out = match raw {
        None => Vec::new(),
        Some(RawTags::List(items)) => items
            .into_iter()
            .flatten()
            .map(RawScalar::into_text)
            .collect(),
        Some(RawTags::Joined(s)) => s.split(',').map(str::to_string).collect(),
    };

    Ok(out
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

pub fn opt_tags<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = tags(d)?;
    Ok(if list.is_empty() { None } else { Some(list) })
}
