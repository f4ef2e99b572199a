//! Conversion of raw values into typed values for a given [`ValueType`].

use crate::registry::{OptionSpec, ValueType};
use crate::value::{RawValue, Value};

use super::ViolationKind;

/// Why a raw value was rejected.
pub(super) struct Rejection {
	pub(super) kind: ViolationKind,
	pub(super) message: String,
}

impl Rejection {
	fn mismatch(spec: &OptionSpec, raw: &RawValue) -> Self {
		Self {
			kind: ViolationKind::TypeMismatch,
			message: format!(
				"{} expects {} but got {} ({raw})",
				spec.key,
				spec.kind.describe(),
				raw.describe()
			),
		}
	}

	fn out_of_range(spec: &OptionSpec, raw: &RawValue) -> Self {
		Self {
			kind: ViolationKind::RangeViolation,
			message: format!(
				"{} = {raw} is out of range, expected {}",
				spec.key,
				spec.kind.describe()
			),
		}
	}
}

/// Type-check `raw` against `spec` and produce the typed value.
pub(super) fn typed_value(spec: &OptionSpec, raw: &RawValue) -> Result<Value, Rejection> {
	match (&spec.kind, raw) {
		(ValueType::Bool, RawValue::Int(value)) => match value {
			0 => Ok(Value::Bool(false)),
			1 => Ok(Value::Bool(true)),
			_ => Err(Rejection::out_of_range(spec, raw)),
		},
		(ValueType::Int { min, max } | ValueType::Bytes { min, max }, RawValue::Int(value)) => {
			if (*min..=*max).contains(value) {
				Ok(Value::Int(*value))
			} else {
				Err(Rejection::out_of_range(spec, raw))
			}
		}
		(ValueType::IntChoice(choices), RawValue::Int(value)) => {
			if choices.contains(value) {
				Ok(Value::Int(*value))
			} else {
				Err(Rejection::out_of_range(spec, raw))
			}
		}
		(ValueType::Choice(choices), RawValue::Symbol(symbol)) => {
			if choices.contains(&symbol.as_str()) {
				Ok(Value::Symbol(symbol.clone()))
			} else {
				Err(Rejection::out_of_range(spec, raw))
			}
		}
		(ValueType::Text, RawValue::Text(text)) => Ok(Value::Text(text.clone())),
		(ValueType::Text, RawValue::Empty) => Ok(Value::Text(String::new())),
		(ValueType::Expression, RawValue::Empty) => Ok(Value::Expression(String::new())),
		(ValueType::Expression, RawValue::Int(_))
		| (ValueType::Expression, RawValue::Symbol(_))
		| (ValueType::Expression, RawValue::Reference(_))
		| (ValueType::Expression, RawValue::Expression(_)) => Ok(Value::Expression(raw.to_string())),
		(ValueType::FontRef, RawValue::Reference(symbol)) => Ok(Value::Reference(symbol.clone())),
		_ => Err(Rejection::mismatch(spec, raw)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::Registry;

	fn check(key: &str, raw: RawValue) -> Result<Value, ViolationKind> {
		let spec = Registry::builtin().lookup(key).unwrap();
		typed_value(spec, &raw).map_err(|rejection| rejection.kind)
	}

	#[test]
	fn booleans_accept_only_zero_and_one() {
		assert_eq!(check("LV_USE_LOG", RawValue::Int(1)), Ok(Value::Bool(true)));
		assert_eq!(check("LV_USE_LOG", RawValue::Int(0)), Ok(Value::Bool(false)));
		assert_eq!(
			check("LV_USE_LOG", RawValue::Int(2)),
			Err(ViolationKind::RangeViolation)
		);
		assert_eq!(
			check("LV_USE_LOG", RawValue::Symbol("yes".into())),
			Err(ViolationKind::TypeMismatch)
		);
	}

	#[test]
	fn numbers_are_range_checked() {
		assert_eq!(
			check("LV_MEM_SIZE", RawValue::Int(64 * 1024)),
			Ok(Value::Int(65_536))
		);
		assert_eq!(
			check("LV_MEM_SIZE", RawValue::Int(1)),
			Err(ViolationKind::RangeViolation)
		);
		assert_eq!(
			check("LV_COLOR_DEPTH", RawValue::Int(24)),
			Err(ViolationKind::RangeViolation)
		);
	}

	#[test]
	fn choices_accept_only_listed_symbols() {
		assert_eq!(
			check("LV_LOG_LEVEL", RawValue::Symbol("LV_LOG_LEVEL_INFO".into())),
			Ok(Value::Symbol("LV_LOG_LEVEL_INFO".into()))
		);
		assert_eq!(
			check("LV_LOG_LEVEL", RawValue::Symbol("LV_LOG_LEVEL_LOUD".into())),
			Err(ViolationKind::RangeViolation)
		);
		assert_eq!(
			check("LV_LOG_LEVEL", RawValue::Int(2)),
			Err(ViolationKind::TypeMismatch)
		);
	}

	#[test]
	fn expressions_keep_their_source_form() {
		assert_eq!(
			check("LV_MEM_CUSTOM_ALLOC", RawValue::Symbol("malloc".into())),
			Ok(Value::Expression("malloc".into()))
		);
		assert_eq!(
			check(
				"LV_TICK_CUSTOM_SYS_TIME_EXPR",
				RawValue::Expression("(millis())".into())
			),
			Ok(Value::Expression("(millis())".into()))
		);
		assert_eq!(
			check("LV_TICK_CUSTOM_SYS_TIME_EXPR", RawValue::Empty),
			Ok(Value::Expression(String::new()))
		);
	}

	#[test]
	fn font_references_require_an_address_of() {
		assert_eq!(
			check(
				"LV_FONT_DEFAULT",
				RawValue::Reference("lv_font_montserrat_36".into())
			),
			Ok(Value::Reference("lv_font_montserrat_36".into()))
		);
		assert_eq!(
			check(
				"LV_FONT_DEFAULT",
				RawValue::Symbol("lv_font_montserrat_36".into())
			),
			Err(ViolationKind::TypeMismatch)
		);
	}
}
