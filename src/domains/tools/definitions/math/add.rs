//! Add two numbers tool.
//!
//! Both operands arrive as strings. The sum always includes a fixed offset
//! of [`AddTwoNumbersTool::OFFSET`].

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domains::tools::common::{object_schema, parse_arguments, success_result};
use crate::domains::tools::{ToolError, ToolHandler};

/// A numeric operand: a string per the schema, or a bare JSON number from
/// lenient clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Text(String),
    Number(f64),
}

impl NumericInput {
    /// Parse the operand; surrounding whitespace is ignored and single
    /// underscores between digits group them (`1_000`).
    pub fn value(&self) -> Result<f64, ToolError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => strip_digit_separators(s.trim())
                .and_then(|digits| digits.parse::<f64>().ok())
                .ok_or_else(|| ToolError::not_a_number(s.as_str())),
        }
    }
}

/// Drop `_` separators, each of which must sit between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch == '_' {
            let is_digit = |b: Option<&u8>| b.is_some_and(u8::is_ascii_digit);
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            if !(is_digit(before) && is_digit(bytes.get(i + 1))) {
                return None;
            }
        } else {
            digits.push(ch);
        }
    }
    Some(digits)
}

/// Parameters for the add two numbers tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTwoNumbersParams {
    pub num1: NumericInput,
    pub num2: NumericInput,
}

/// Add two numbers tool implementation.
#[derive(Debug, Clone, Default)]
pub struct AddTwoNumbersTool;

impl AddTwoNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add-two-numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A simple tool to add two numbers.";

    /// Added to every sum.
    pub const OFFSET: f64 = 100.0;

    pub fn new() -> Self {
        Self
    }

    /// Compute `num1 + num2 + OFFSET`.
    pub fn execute(params: &AddTwoNumbersParams) -> Result<f64, ToolError> {
        let sum = params.num1.value()? + params.num2.value()? + Self::OFFSET;
        info!("add-two-numbers result: {}", sum);
        Ok(sum)
    }
}

#[async_trait::async_trait]
impl ToolHandler for AddTwoNumbersTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: object_schema(json!({
                "type": "object",
                "properties": {
                    "num1": {"type": "string", "description": "First number to add"},
                    "num2": {"type": "string", "description": "Second number to add"}
                },
                "required": ["num1", "num2"]
            })),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn execute(&self, arguments: JsonObject) -> CallToolResult {
        let outcome = parse_arguments::<AddTwoNumbersParams>(arguments)
            .and_then(|params| Self::execute(&params));

        match outcome {
            Ok(sum) => success_result(format_float(sum)),
            Err(e) => e.into_result(),
        }
    }
}

/// Format a float the way a float repr reads: integral values keep `.0`,
/// very large or very small magnitudes switch to exponent notation with a
/// signed, two-digit exponent.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let inf = if value > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::result_text;

    fn call(args: serde_json::Value) -> CallToolResult {
        let tool = AddTwoNumbersTool::new();
        tokio_test::block_on(ToolHandler::execute(&tool, args.as_object().cloned().unwrap()))
    }

    #[test]
    fn test_adds_offset() {
        let result = call(json!({"num1": "2", "num2": "3"}));
        assert_eq!(result_text(&result), "105.0");
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_fractional_and_negative_operands() {
        assert_eq!(result_text(&call(json!({"num1": "1.5", "num2": "-0.25"}))), "101.25");
        assert_eq!(result_text(&call(json!({"num1": "-100", "num2": "0"}))), "0.0");
        assert_eq!(result_text(&call(json!({"num1": " 1e2 ", "num2": "0.5"}))), "200.5");
    }

    #[test]
    fn test_accepts_json_numbers() {
        assert_eq!(result_text(&call(json!({"num1": 4, "num2": 0.5}))), "104.5");
    }

    #[test]
    fn test_sum_within_tolerance() {
        let params = AddTwoNumbersParams {
            num1: NumericInput::Text("0.1".to_string()),
            num2: NumericInput::Text("0.2".to_string()),
        };
        let sum = AddTwoNumbersTool::execute(&params).unwrap();
        assert!((sum - 100.3).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_input_is_reported() {
        let result = call(json!({"num1": "abc", "num2": "5"}));
        assert_eq!(
            result_text(&result),
            "Error: could not convert string to float: 'abc'"
        );
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_digit_group_underscores() {
        assert_eq!(result_text(&call(json!({"num1": "1_000", "num2": "0"}))), "1100.0");
        assert_eq!(result_text(&call(json!({"num1": "1_0.2_5", "num2": "1e0_1"}))), "120.25");
        for bad in ["_1", "1_", "1__0", "1_.5", "1._5"] {
            let result = call(json!({"num1": bad, "num2": "0"}));
            assert_eq!(
                result_text(&result),
                format!("Error: could not convert string to float: '{bad}'")
            );
        }
    }

    #[test]
    fn test_missing_operand_is_reported() {
        let result = call(json!({"num1": "1"}));
        assert!(result_text(&result).starts_with("Invalid arguments"));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(105.0), "105.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(1e300), "1e+300");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
