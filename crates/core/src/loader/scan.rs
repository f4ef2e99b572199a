//! Splits raw text into logical lines with comments removed.

/// A line after comment removal and continuation joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LogicalLine {
	/// One-based number of the physical line the logical line starts on.
	pub(super) line: usize,
	pub(super) text: String,
}

/// Result of scanning a source: its logical lines, plus the starting line of
/// a block comment that never closed.
#[derive(Debug, Default)]
pub(super) struct Scan {
	pub(super) lines: Vec<LogicalLine>,
	pub(super) unterminated_comment: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Code,
	Quoted(char),
	BlockComment,
	LineComment,
}

/// Strip `/* */` and `//` comments, join backslash continuations, and split
/// into logical lines. Quotes and continuations are only honoured on directive
/// lines, so commentary can never reach into the line that follows it.
pub(super) fn scan(text: &str) -> Scan {
	let mut scan = Scan::default();
	let mut state = State::Code;
	let mut current = String::new();
	let mut line = 1;
	let mut start_line = 1;
	let mut comment_start = 0;
	let mut chars = text.chars().peekable();

	while let Some(ch) = chars.next() {
		match state {
			State::Code => match ch {
				'/' if chars.peek() == Some(&'*') => {
					chars.next();
					comment_start = line;
					state = State::BlockComment;
					current.push(' ');
				}
				'/' if chars.peek() == Some(&'/') => {
					chars.next();
					state = State::LineComment;
				}
				'\\'
					if is_directive(&current)
						&& matches!(chars.peek(), Some('\n') | Some('\r')) =>
				{
					skip_newline(&mut chars);
					line += 1;
					current.push(' ');
				}
				'\n' => {
					finish_line(&mut scan, &mut current, start_line);
					line += 1;
					start_line = line;
				}
				'"' | '\'' if is_directive(&current) => {
					state = State::Quoted(ch);
					current.push(ch);
				}
				_ => {
					if !ch.is_whitespace() && current.trim().is_empty() {
						start_line = line;
					}
					current.push(ch);
				}
			},
			State::Quoted(quote) => match ch {
				'\\' => {
					current.push(ch);
					if let Some(next) = chars.next() {
						if next == '\n' {
							line += 1;
						}
						current.push(next);
					}
				}
				'\n' => {
					state = State::Code;
					finish_line(&mut scan, &mut current, start_line);
					line += 1;
					start_line = line;
				}
				_ => {
					current.push(ch);
					if ch == quote {
						state = State::Code;
					}
				}
			},
			State::BlockComment => match ch {
				'*' if chars.peek() == Some(&'/') => {
					chars.next();
					state = State::Code;
				}
				'\n' => line += 1,
				_ => {}
			},
			State::LineComment => {
				if ch == '\n' {
					state = State::Code;
					finish_line(&mut scan, &mut current, start_line);
					line += 1;
					start_line = line;
				}
			}
		}
	}

	if state == State::BlockComment {
		scan.unterminated_comment = Some(comment_start);
	}
	finish_line(&mut scan, &mut current, start_line);
	scan
}

fn is_directive(current: &str) -> bool {
	current.trim_start().starts_with('#')
}

fn skip_newline(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
	if chars.peek() == Some(&'\r') {
		chars.next();
	}
	if chars.peek() == Some(&'\n') {
		chars.next();
	}
}

fn finish_line(scan: &mut Scan, current: &mut String, line: usize) {
	let text = current.trim();
	if !text.is_empty() {
		scan.lines.push(LogicalLine {
			line,
			text: text.to_string(),
		});
	}
	current.clear();
}
