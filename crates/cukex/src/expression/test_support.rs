//! Test helpers for asserting expression compilation outcomes.
use super::compiler::build_regex;
use crate::errors::ExpressionError;
use crate::registry::ParameterTypeRegistry;

pub(crate) fn build_ok(expression: &str) -> String {
    match build_regex(expression, &ParameterTypeRegistry::builtin()) {
        Ok(regex) => regex,
        Err(err) => panic!("expression {expression:?} should build: {err}"),
    }
}

pub(crate) fn build_err(expression: &str) -> ExpressionError {
    match build_regex(expression, &ParameterTypeRegistry::builtin()) {
        Ok(regex) => panic!("expression {expression:?} should fail, built {regex:?}"),
        Err(err) => err,
    }
}
