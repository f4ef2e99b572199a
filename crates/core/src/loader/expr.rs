//! Evaluation of constant integer expressions such as `(128U * 1024U)`.
//!
//! Anything that is not a pure constant (identifiers, calls, casts) makes the
//! whole expression unevaluable and the caller keeps it verbatim. So does
//! nesting deeper than `MAX_DEPTH`.

use std::iter::Peekable;
use std::str::CharIndices;

/// Deepest nesting of parentheses and unary operators that is evaluated.
const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
	Number(i64),
	Plus,
	Minus,
	Star,
	Slash,
	Percent,
	Shl,
	Shr,
	Less,
	LessEq,
	Greater,
	GreaterEq,
	Equal,
	NotEqual,
	Amp,
	Pipe,
	AndAnd,
	OrOr,
	Caret,
	Tilde,
	Bang,
	Open,
	Close,
}

impl Token {
	fn precedence(self) -> Option<u8> {
		match self {
			Self::Star | Self::Slash | Self::Percent => Some(10),
			Self::Plus | Self::Minus => Some(9),
			Self::Shl | Self::Shr => Some(8),
			Self::Less | Self::LessEq | Self::Greater | Self::GreaterEq => Some(7),
			Self::Equal | Self::NotEqual => Some(6),
			Self::Amp => Some(5),
			Self::Caret => Some(4),
			Self::Pipe => Some(3),
			Self::AndAnd => Some(2),
			Self::OrOr => Some(1),
			_ => None,
		}
	}

	fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
		match self {
			Self::Star => lhs.checked_mul(rhs),
			Self::Slash => lhs.checked_div(rhs),
			Self::Percent => lhs.checked_rem(rhs),
			Self::Plus => lhs.checked_add(rhs),
			Self::Minus => lhs.checked_sub(rhs),
			Self::Shl => lhs.checked_shl(u32::try_from(rhs).ok()?),
			Self::Shr => lhs.checked_shr(u32::try_from(rhs).ok()?),
			Self::Amp => Some(lhs & rhs),
			Self::Caret => Some(lhs ^ rhs),
			Self::Pipe => Some(lhs | rhs),
			Self::Less => Some(i64::from(lhs < rhs)),
			Self::LessEq => Some(i64::from(lhs <= rhs)),
			Self::Greater => Some(i64::from(lhs > rhs)),
			Self::GreaterEq => Some(i64::from(lhs >= rhs)),
			Self::Equal => Some(i64::from(lhs == rhs)),
			Self::NotEqual => Some(i64::from(lhs != rhs)),
			Self::AndAnd => Some(i64::from(lhs != 0 && rhs != 0)),
			Self::OrOr => Some(i64::from(lhs != 0 || rhs != 0)),
			_ => None,
		}
	}
}

/// Evaluate `text` as a constant integer expression.
pub(crate) fn evaluate(text: &str) -> Option<i64> {
	let tokens = tokenize(text)?;
	if tokens.is_empty() {
		return None;
	}
	let mut parser = Parser {
		tokens,
		pos: 0,
		depth: 0,
	};
	let value = parser.expression(0)?;
	(parser.pos == parser.tokens.len()).then_some(value)
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
	let mut tokens = Vec::new();
	let mut chars = text.char_indices().peekable();

	while let Some((start, ch)) = chars.next() {
		let token = match ch {
			c if c.is_whitespace() => continue,
			'0'..='9' => {
				let mut end = start + ch.len_utf8();
				while let Some(&(idx, next)) = chars.peek() {
					if next.is_ascii_alphanumeric() {
						end = idx + next.len_utf8();
						chars.next();
					} else {
						break;
					}
				}
				Token::Number(parse_literal(&text[start..end])?)
			}
			'+' => Token::Plus,
			'-' => Token::Minus,
			'*' => Token::Star,
			'/' => Token::Slash,
			'%' => Token::Percent,
			'&' if followed_by(&mut chars, '&') => Token::AndAnd,
			'&' => Token::Amp,
			'|' if followed_by(&mut chars, '|') => Token::OrOr,
			'|' => Token::Pipe,
			'^' => Token::Caret,
			'~' => Token::Tilde,
			'!' if followed_by(&mut chars, '=') => Token::NotEqual,
			'!' => Token::Bang,
			'=' if followed_by(&mut chars, '=') => Token::Equal,
			'(' => Token::Open,
			')' => Token::Close,
			'<' if followed_by(&mut chars, '<') => Token::Shl,
			'<' if followed_by(&mut chars, '=') => Token::LessEq,
			'<' => Token::Less,
			'>' if followed_by(&mut chars, '>') => Token::Shr,
			'>' if followed_by(&mut chars, '=') => Token::GreaterEq,
			'>' => Token::Greater,
			_ => return None,
		};
		tokens.push(token);
	}

	Some(tokens)
}

/// Consume the next character if it is `expected`.
fn followed_by(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> bool {
	chars.next_if(|&(_, next)| next == expected).is_some()
}

/// Parse a C integer literal with an optional `U`/`L` suffix.
fn parse_literal(literal: &str) -> Option<i64> {
	let digits = literal.trim_end_matches(['u', 'U', 'l', 'L']);
	if digits.is_empty() {
		return None;
	}

	let (body, radix) = if let Some(hex) = digits
		.strip_prefix("0x")
		.or_else(|| digits.strip_prefix("0X"))
	{
		(hex, 16)
	} else if digits.len() > 1 && digits.starts_with('0') {
		(&digits[1..], 8)
	} else {
		(digits, 10)
	};

	i64::from_str_radix(body, radix).ok()
}

struct Parser {
	tokens: Vec<Token>,
	pos: usize,
	depth: usize,
}

impl Parser {
	fn next(&mut self) -> Option<Token> {
		let token = self.tokens.get(self.pos).copied()?;
		self.pos += 1;
		Some(token)
	}

	fn expression(&mut self, min_precedence: u8) -> Option<i64> {
		let mut lhs = self.unary()?;

		while let Some(&op) = self.tokens.get(self.pos) {
			let Some(precedence) = op.precedence() else {
				break;
			};
			if precedence < min_precedence {
				break;
			}
			self.pos += 1;
			let rhs = self.expression(precedence + 1)?;
			lhs = op.apply(lhs, rhs)?;
		}

		Some(lhs)
	}

	fn unary(&mut self) -> Option<i64> {
		if self.depth >= MAX_DEPTH {
			return None;
		}
		self.depth += 1;
		let value = self.operand();
		self.depth -= 1;
		value
	}

	fn operand(&mut self) -> Option<i64> {
		match self.next()? {
			Token::Number(value) => Some(value),
			Token::Minus => self.unary()?.checked_neg(),
			Token::Plus => self.unary(),
			Token::Tilde => Some(!self.unary()?),
			Token::Bang => Some(i64::from(self.unary()? == 0)),
			Token::Open => {
				let value = self.expression(0)?;
				(self.next()? == Token::Close).then_some(value)
			}
			_ => None,
		}
	}
}
