/// Language hint Discord uses to interpret SGR sequences inside a code block.
pub const FENCE_LANGUAGE: &str = "ansi";

const FENCE: &str = "```";

/// Wrap the buffer verbatim in an `ansi` fenced code block.
pub fn fence(buffer: &str) -> String {
	let mut out = String::with_capacity(buffer.len() + 2 * FENCE.len() + FENCE_LANGUAGE.len() + 2);
	out.push_str(FENCE);
	out.push_str(FENCE_LANGUAGE);
	out.push('\n');
	out.push_str(buffer);
	out.push('\n');
	out.push_str(FENCE);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_buffer_in_ansi_fence() {
		assert_eq!(fence("Hello"), "```ansi\nHello\n```");
	}

	#[test]
	fn empty_and_multiline_buffers_are_kept_verbatim() {
		assert_eq!(fence(""), "```ansi\n\n```");
		assert_eq!(fence("a\n\nb\n"), "```ansi\na\n\nb\n\n```");
	}

	#[test]
	fn repeated_fencing_of_same_buffer_is_stable() {
		let buffer = "\u{1b}[38;2;1;2;3mhi\u{1b}[0m**x**";
		assert_eq!(fence(buffer), fence(buffer));
	}
}
