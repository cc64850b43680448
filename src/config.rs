// src/config.rs
//! Trigger configuration: line-oriented text into the active trigger list.
//!
//! Grammar per non-empty, non-`//` line (fields comma-separated, trimmed,
//! no comma escaping):
//! - definition: `name,KIND,args...` with KIND in
//!   {TITLE, DESCRIPTION, AFTER, BEFORE, NOT, AND, OR};
//! - activation: `ADD,name1,name2,...`.
//!
//! Resolution is a single top-to-bottom pass: a name is usable only after the
//! line that defines it, and composites store owned, already-resolved
//! children rather than name strings. Redefining a name overwrites the prior
//! entry. Any error aborts the whole build; there is no partial registry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::trigger::{parse_reference_time, Trigger};

#[derive(Debug, Error)]
pub enum TriggerConfigError {
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("line {line}: trigger '{name}' referenced before definition")]
    Reference { line: usize, name: String },

    #[error("line {line}: bad reference timestamp: {source}")]
    Timestamp {
        line: usize,
        #[source]
        source: chrono::ParseError,
    },
}

/// Build the active trigger list from configuration text.
///
/// Returns the triggers named by `ADD` lines, in activation order; a name
/// added twice appears twice. Ill-formed input fails the whole build.
pub fn build_active_triggers(config_text: &str) -> Result<Vec<Trigger>, TriggerConfigError> {
    let mut registry: HashMap<String, Trigger> = HashMap::new();
    let mut active: Vec<Trigger> = Vec::new();

    for (idx, raw) in config_text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields[0] == "ADD" {
            if fields.len() < 2 {
                return Err(format_err(line_no, "ADD needs at least one trigger name"));
            }
            for name in &fields[1..] {
                active.push(lookup(&registry, name, line_no)?);
            }
            continue;
        }

        if fields.len() < 3 {
            return Err(format_err(
                line_no,
                "definition needs a name, a kind and arguments",
            ));
        }
        let name = fields[0];
        if name.is_empty() {
            return Err(format_err(line_no, "empty trigger name"));
        }
        let kind = fields[1];
        let args = &fields[2..];

        let trigger = match kind {
            "TITLE" => {
                expect_arity(kind, args, 1, line_no)?;
                Trigger::Title(args[0].to_string())
            }
            "DESCRIPTION" => {
                expect_arity(kind, args, 1, line_no)?;
                Trigger::Description(args[0].to_string())
            }
            "BEFORE" | "AFTER" => {
                expect_arity(kind, args, 1, line_no)?;
                let at = parse_reference_time(args[0]).map_err(|source| {
                    TriggerConfigError::Timestamp {
                        line: line_no,
                        source,
                    }
                })?;
                if kind == "BEFORE" {
                    Trigger::Before(at)
                } else {
                    Trigger::After(at)
                }
            }
            "NOT" => {
                expect_arity(kind, args, 1, line_no)?;
                Trigger::Not(Box::new(lookup(&registry, args[0], line_no)?))
            }
            "AND" | "OR" => {
                expect_arity(kind, args, 2, line_no)?;
                let left = Box::new(lookup(&registry, args[0], line_no)?);
                let right = Box::new(lookup(&registry, args[1], line_no)?);
                if kind == "AND" {
                    Trigger::And(left, right)
                } else {
                    Trigger::Or(left, right)
                }
            }
            other => {
                return Err(format_err(
                    line_no,
                    &format!("unknown trigger kind '{other}'"),
                ));
            }
        };
        registry.insert(name.to_string(), trigger);
    }

    Ok(active)
}

/// Read a trigger configuration file and build its active trigger list.
pub fn load_trigger_file(path: &Path) -> anyhow::Result<Vec<Trigger>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading trigger config from {}", path.display()))?;
    Ok(build_active_triggers(&text)?)
}

fn format_err(line: usize, reason: &str) -> TriggerConfigError {
    TriggerConfigError::Format {
        line,
        reason: reason.to_string(),
    }
}

fn expect_arity(
    kind: &str,
    args: &[&str],
    want: usize,
    line: usize,
) -> Result<(), TriggerConfigError> {
    if args.len() != want {
        return Err(TriggerConfigError::Format {
            line,
            reason: format!("{kind} takes {want} argument(s), got {}", args.len()),
        });
    }
    Ok(())
}

fn lookup(
    registry: &HashMap<String, Trigger>,
    name: &str,
    line: usize,
) -> Result<Trigger, TriggerConfigError> {
    registry
        .get(name)
        .cloned()
        .ok_or_else(|| TriggerConfigError::Reference {
            line,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let cfg = "\n// just a comment\n\nt1,TITLE,cow\nADD,t1\n";
        let active = build_active_triggers(cfg).unwrap();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn unknown_kind_is_a_format_error() {
        let err = build_active_triggers("x,MAYBE,foo").unwrap_err();
        assert!(matches!(err, TriggerConfigError::Format { line: 1, .. }));
    }

    #[test]
    fn wrong_arity_is_a_format_error() {
        for cfg in [
            "t1,TITLE,cow,extra",
            "t1,TITLE,cow\nt2,NOT,t1,t1",
            "t1,TITLE,cow\nt2,AND,t1",
            "justtwo,TITLE",
        ] {
            let err = build_active_triggers(cfg).unwrap_err();
            assert!(matches!(err, TriggerConfigError::Format { .. }), "{cfg}");
        }
    }

    #[test]
    fn undefined_name_is_a_reference_error() {
        let err = build_active_triggers("ADD,t9").unwrap_err();
        match err {
            TriggerConfigError::Reference { line, name } => {
                assert_eq!(line, 1);
                assert_eq!(name, "t9");
            }
            other => panic!("expected Reference, got {other:?}"),
        }
    }

    #[test]
    fn forward_reference_across_lines_is_rejected() {
        // t2 is defined later in the file; a single pass must not see it.
        let cfg = "t1,NOT,t2\nt2,TITLE,cow\nADD,t1";
        let err = build_active_triggers(cfg).unwrap_err();
        assert!(matches!(
            err,
            TriggerConfigError::Reference { line: 1, .. }
        ));
    }

    #[test]
    fn bad_timestamp_is_a_timestamp_error() {
        let err = build_active_triggers("t1,AFTER,yesterday-ish").unwrap_err();
        assert!(matches!(err, TriggerConfigError::Timestamp { line: 1, .. }));
    }

    #[test]
    fn redefinition_overwrites() {
        let cfg = "t1,TITLE,cow\nt1,TITLE,zebra\nADD,t1";
        let active = build_active_triggers(cfg).unwrap();
        match &active[0] {
            Trigger::Title(p) => assert_eq!(p, "zebra"),
            other => panic!("unexpected trigger {other:?}"),
        }
    }

    #[test]
    fn duplicate_activation_is_permitted() {
        let cfg = "t1,TITLE,cow\nADD,t1,t1";
        let active = build_active_triggers(cfg).unwrap();
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn composites_resolve_earlier_names() {
        let cfg = "\
t1,TITLE,election
t2,DESCRIPTION,vote
t3,OR,t1,t2
t4,NOT,t3
ADD,t3,t4";
        let active = build_active_triggers(cfg).unwrap();
        assert_eq!(active.len(), 2);
        assert!(matches!(active[0], Trigger::Or(..)));
        assert!(matches!(active[1], Trigger::Not(..)));
    }
}
