//! Tracking of `#if`/`#elif`/`#else`/`#endif` nesting.
//!
//! Conditions that fold to a constant select their branch. Anything else
//! (`#ifdef`, `#if LV_MEM_CUSTOM == 0`, ...) is opaque: the first opaque
//! branch is treated as taken so that its siblings are skipped.

use super::error::LoadError;
use super::expr::evaluate;
use crate::value::Provenance;

/// A conditional directive with its condition folded where possible.
/// `None` means the condition could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Directive {
	If(Option<bool>),
	Elif(Option<bool>),
	Else,
	Endif,
}

impl Directive {
	pub(super) fn parse(name: &str, rest: &str) -> Self {
		match name {
			"if" => Self::If(fold(rest)),
			"elif" => Self::Elif(fold(rest)),
			"else" => Self::Else,
			"endif" => Self::Endif,
			// ifdef/ifndef depend on the including translation unit.
			_ => Self::If(None),
		}
	}
}

fn fold(condition: &str) -> Option<bool> {
	evaluate(condition.trim()).map(|value| value != 0)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
	parent_active: bool,
	active: bool,
	taken: bool,
	seen_else: bool,
	line: usize,
}

#[derive(Debug, Default)]
pub(super) struct ConditionStack {
	frames: Vec<Frame>,
}

impl ConditionStack {
	/// Whether lines at the current position are live.
	pub(super) fn is_active(&self) -> bool {
		self.frames.last().is_none_or(|frame| frame.active)
	}

	/// Line of the innermost block still open, if any.
	pub(super) fn unclosed(&self) -> Option<usize> {
		self.frames.last().map(|frame| frame.line)
	}

	pub(super) fn apply(
		&mut self,
		directive: Directive,
		origin: &Provenance,
	) -> Result<(), LoadError> {
		match directive {
			Directive::If(condition) => {
				let parent_active = self.is_active();
				let active = parent_active && condition.unwrap_or(true);
				self.frames.push(Frame {
					parent_active,
					active,
					taken: active,
					seen_else: false,
					line: origin.line(),
				});
				Ok(())
			}
			Directive::Elif(condition) => {
				let frame = self.innermost("elif", origin)?;
				if frame.seen_else {
					return Err(LoadError::AfterElse {
						directive: "elif",
						origin: origin.clone(),
					});
				}
				frame.active = frame.parent_active && !frame.taken && condition.unwrap_or(true);
				frame.taken |= frame.active;
				Ok(())
			}
			Directive::Else => {
				let frame = self.innermost("else", origin)?;
				if frame.seen_else {
					return Err(LoadError::AfterElse {
						directive: "else",
						origin: origin.clone(),
					});
				}
				frame.active = frame.parent_active && !frame.taken;
				frame.taken = true;
				frame.seen_else = true;
				Ok(())
			}
			Directive::Endif => {
				self.innermost("endif", origin)?;
				self.frames.pop();
				Ok(())
			}
		}
	}

	fn innermost(
		&mut self,
		directive: &'static str,
		origin: &Provenance,
	) -> Result<&mut Frame, LoadError> {
		self.frames
			.last_mut()
			.ok_or_else(|| LoadError::UnbalancedDirective {
				directive,
				origin: origin.clone(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(line: usize) -> Provenance {
		Provenance::new("test.h", line)
	}

	#[test]
	fn constant_conditions_select_a_branch() {
		let mut stack = ConditionStack::default();
		stack.apply(Directive::parse("if", " 0"), &at(1)).unwrap();
		assert!(!stack.is_active());
		stack.apply(Directive::parse("elif", " 1 + 1"), &at(2)).unwrap();
		assert!(stack.is_active());
		stack.apply(Directive::parse("else", ""), &at(3)).unwrap();
		assert!(!stack.is_active());
		stack.apply(Directive::parse("endif", ""), &at(4)).unwrap();
		assert!(stack.is_active());
		assert_eq!(stack.unclosed(), None);
	}

	#[test]
	fn opaque_conditions_take_the_first_branch() {
		let mut stack = ConditionStack::default();
		stack
			.apply(Directive::parse("if", " LV_MEM_CUSTOM == 0"), &at(1))
			.unwrap();
		assert!(stack.is_active());
		stack.apply(Directive::Else, &at(3)).unwrap();
		assert!(!stack.is_active());
	}

	#[test]
	fn inactive_parent_disables_nested_blocks() {
		let mut stack = ConditionStack::default();
		stack.apply(Directive::If(Some(false)), &at(1)).unwrap();
		stack.apply(Directive::If(Some(true)), &at(2)).unwrap();
		assert!(!stack.is_active());
		stack.apply(Directive::Else, &at(3)).unwrap();
		assert!(!stack.is_active());
		stack.apply(Directive::Endif, &at(4)).unwrap();
		assert_eq!(stack.unclosed(), Some(1));
	}

	#[test]
	fn unbalanced_directives_are_rejected() {
		let mut stack = ConditionStack::default();
		let err = stack.apply(Directive::Endif, &at(7)).unwrap_err();
		assert!(matches!(
			err,
			LoadError::UnbalancedDirective {
				directive: "endif",
				..
			}
		));

		stack.apply(Directive::If(None), &at(8)).unwrap();
		stack.apply(Directive::Else, &at(9)).unwrap();
		let err = stack.apply(Directive::Elif(Some(true)), &at(10)).unwrap_err();
		assert_eq!(err.to_string(), "test.h:10: #elif after #else");
	}
}
