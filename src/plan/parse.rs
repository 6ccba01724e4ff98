//! Cycle specification parser
//!
//! Parses the textual form `(size,count)(size,count)...` into raw
//! [`CycleSpec`] pairs. Whitespace between and inside groups is ignored.

use crate::error::SpecParseError;

use super::CycleSpec;

/// Parse a cycle specification string.
///
/// An empty (or whitespace only) string yields an empty list. Fields may be
/// negative to request inference; no resolution happens here.
pub fn parse_spec(input: &str) -> Result<Vec<CycleSpec>, SpecParseError> {
    let mut specs = Vec::new();
    let mut rest = input;
    let mut offset = 0;

    loop {
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        rest = trimmed;

        let Some(c) = rest.chars().next() else {
            break;
        };
        if c != '(' {
            return Err(SpecParseError::UnexpectedChar {
                found: c,
                position: offset,
            });
        }

        let group = specs.len() + 1;
        let close = rest.find(')').ok_or(SpecParseError::Unclosed { group })?;
        specs.push(parse_group(group, &rest[1..close])?);

        offset += close + 1;
        rest = &rest[close + 1..];
    }

    Ok(specs)
}

/// Parse the body of one group, e.g. `3, -1`
fn parse_group(group: usize, body: &str) -> Result<CycleSpec, SpecParseError> {
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let [size, count] = fields.as_slice() else {
        return Err(SpecParseError::WrongArity {
            group,
            body: body.to_string(),
        });
    };

    Ok(CycleSpec::new(
        parse_field(group, size)?,
        parse_field(group, count)?,
    ))
}

fn parse_field(group: usize, field: &str) -> Result<i64, SpecParseError> {
    field.parse().map_err(|_| SpecParseError::NotAnInteger {
        group,
        field: field.to_string(),
    })
}
