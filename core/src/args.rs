//! Typed call arguments and signature validation.
//!
//! # Design
//! Callers of the dynamic `call` path hand over `Argument` values; each
//! operation declares a fixed list of `Param`s. `validate` checks the count
//! first (a mismatch is a programming error and is reported as
//! `ContractViolation`), then each value against its declared `ParamType`
//! (a mismatch is a `UserError`), and finally fills omitted trailing
//! parameters from their defaults. Nothing here performs I/O.

use std::fmt;

use crate::error::{ApiError, ApiResult};
use crate::operation::Operation;

/// A single positional argument as supplied by the caller.
///
/// Only `Text` and `Integer` are ever accepted by a signature. The remaining
/// variants exist so that any value can be handed to the dynamic path and be
/// rejected with a descriptive `UserError` instead of failing to convert.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Argument>),
}

impl Argument {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Argument::Text(_) => "text",
            Argument::Integer(_) => "integer",
            Argument::Float(_) => "float",
            Argument::Bool(_) => "boolean",
            Argument::List(_) => "list",
        }
    }

    /// The value as it is written into a data row.
    pub fn to_wire(&self) -> String {
        match self {
            Argument::Text(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Text(s) => write!(f, "{s:?}"),
            Argument::Integer(n) => write!(f, "{n}"),
            Argument::Float(x) => write!(f, "{x:?}"),
            Argument::Bool(b) => write!(f, "{b}"),
            Argument::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Text(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Text(s)
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Argument::Integer(n)
    }
}

impl From<i32> for Argument {
    fn from(n: i32) -> Self {
        Argument::Integer(n.into())
    }
}

impl From<u32> for Argument {
    fn from(n: u32) -> Self {
        Argument::Integer(n.into())
    }
}

impl From<f64> for Argument {
    fn from(x: f64) -> Self {
        Argument::Float(x)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Bool(b)
    }
}

impl From<Vec<Argument>> for Argument {
    fn from(items: Vec<Argument>) -> Self {
        Argument::List(items)
    }
}

/// Type a parameter slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Text,
    Integer,
    /// A part-of-speech tag or a numeric threshold, depending on the operation.
    TextOrInteger,
}

impl ParamType {
    pub fn accepts(self, arg: &Argument) -> bool {
        matches!(
            (self, arg),
            (ParamType::Text, Argument::Text(_))
                | (ParamType::Integer, Argument::Integer(_))
                | (ParamType::TextOrInteger, Argument::Text(_) | Argument::Integer(_))
        )
    }

    pub fn describe(self) -> &'static str {
        match self {
            ParamType::Text => "text",
            ParamType::Integer => "a whole number",
            ParamType::TextOrInteger => "text or a whole number",
        }
    }
}

/// One slot in an operation's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Key written into the data row, e.g. `Wort`.
    pub key: &'static str,
    pub ty: ParamType,
    /// Value used when the caller omits this (trailing) parameter.
    pub default: Option<i64>,
}

impl Param {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            ty: ParamType::Text,
            default: None,
        }
    }

    pub const fn text_or_integer(key: &'static str) -> Self {
        Self {
            key,
            ty: ParamType::TextOrInteger,
            default: None,
        }
    }

    pub const fn integer(key: &'static str, default: i64) -> Self {
        Self {
            key,
            ty: ParamType::Integer,
            default: Some(default),
        }
    }
}

/// Reject a call whose argument count does not fit the signature.
pub fn check_arity(op: &Operation, supplied: usize) -> ApiResult<()> {
    let min = op.required_arity();
    let max = op.arity();
    if supplied < min || supplied > max {
        return Err(ApiError::ContractViolation {
            operation: op.name,
            min,
            max,
            actual: supplied,
        });
    }
    Ok(())
}

/// Check `args` against the signature of `op` and return the full argument
/// list with omitted defaults filled in.
pub fn validate(op: &Operation, args: &[Argument]) -> ApiResult<Vec<Argument>> {
    check_arity(op, args.len())?;

    for (index, (param, arg)) in op.params.iter().zip(args).enumerate() {
        if !param.ty.accepts(arg) {
            return Err(ApiError::UserError {
                operation: op.name,
                position: index + 1,
                value: format!("{arg} ({})", arg.type_name()),
                expected: param.ty.describe(),
            });
        }
    }

    let mut resolved = args.to_vec();
    for param in &op.params[args.len()..] {
        // check_arity guarantees every omitted parameter has a default.
        if let Some(default) = param.default {
            resolved.push(Argument::Integer(default));
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str) -> &'static Operation {
        Operation::lookup(name).unwrap()
    }

    #[test]
    fn text_argument_accepted_for_single_parameter() {
        let args = validate(op("baseform"), &["Autos".into()]).unwrap();
        assert_eq!(args, vec![Argument::Text("Autos".to_string())]);
    }

    #[test]
    fn integer_rejected_for_text_parameter() {
        let err = validate(op("frequencies"), &[1.into()]).unwrap_err();
        match err {
            ApiError::UserError {
                operation,
                position,
                value,
                expected,
            } => {
                assert_eq!(operation, "frequencies");
                assert_eq!(position, 1);
                assert_eq!(value, "1 (integer)");
                assert_eq!(expected, "text");
            }
            other => panic!("expected UserError, got {other:?}"),
        }
    }

    #[test]
    fn omitted_limit_defaults_to_ten() {
        let args = validate(op("synonyms"), &["Brot".into()]).unwrap();
        assert_eq!(args, vec![Argument::from("Brot"), Argument::Integer(10)]);
    }

    #[test]
    fn explicit_limit_is_kept() {
        let args = validate(op("sentences"), &["Klasse".into(), 1.into()]).unwrap();
        assert_eq!(args[1], Argument::Integer(1));
    }

    #[test]
    fn list_rejected_for_limit() {
        let bad = Argument::List(vec!["a".into()]);
        let err = validate(op("thesaurus"), &["Haus".into(), bad]).unwrap_err();
        assert!(matches!(err, ApiError::UserError { position: 2, .. }));
    }

    #[test]
    fn second_of_three_accepts_text_or_integer() {
        let finder = op("right_collocation_finder");
        assert!(validate(finder, &["Stuhl".into(), "V".into(), 3.into()]).is_ok());
        assert!(validate(finder, &["Stuhl".into(), 5.into(), 3.into()]).is_ok());
        let err = validate(finder, &["Stuhl".into(), 3.5.into(), 3.into()]).unwrap_err();
        assert!(matches!(err, ApiError::UserError { position: 2, .. }));
    }

    #[test]
    fn first_bad_argument_is_reported() {
        let err = validate(op("left_collocation_finder"), &[3.into(), 3.5.into(), "a".into()])
            .unwrap_err();
        assert!(matches!(err, ApiError::UserError { position: 1, .. }));
    }

    #[test]
    fn too_few_arguments_is_contract_violation() {
        let err = validate(op("baseform"), &[]).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ContractViolation { min: 1, max: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn too_many_arguments_is_contract_violation_even_with_bad_types() {
        let err = validate(op("wordforms"), &[1.into(), 2.into(), 3.into()]).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ContractViolation { min: 1, max: 2, actual: 3, .. }
        ));
    }

    #[test]
    fn display_quotes_text_and_brackets_lists() {
        let list = Argument::List(vec!["a".into(), 2.into()]);
        assert_eq!(list.to_string(), r#"["a", 2]"#);
        assert_eq!(Argument::Float(3.5).to_string(), "3.5");
    }

    #[test]
    fn wire_value_of_integer_is_decimal() {
        assert_eq!(Argument::Integer(200).to_wire(), "200");
        assert_eq!(Argument::from("Auto").to_wire(), "Auto");
    }
}
