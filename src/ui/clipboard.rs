use std::io::Write;
use std::process::{Command, Stdio};

use base64::Engine;
use tracing::debug;

use crate::composer::{Clipboard, ClipboardError};

/// Clipboard that writes through the terminal.
///
/// OSC 52 is tried first (works across tmux and ssh); native tools are the
/// fallback when the escape cannot be written. If both fail, the OSC 52 write
/// error is reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
	fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
		copy_with_fallback(try_osc52_copy(text), || try_native_clipboard(text))
	}
}

fn copy_with_fallback(
	osc52: std::io::Result<()>,
	native: impl FnOnce() -> Result<(), ClipboardError>,
) -> Result<(), ClipboardError> {
	match osc52 {
		Ok(()) => Ok(()),
		Err(err) => {
			debug!(%err, "OSC 52 copy failed, trying native tools");
			native().map_err(|_| ClipboardError::Io(err))
		}
	}
}

/// Build the OSC 52 sequence for `text`, wrapped for tmux pass-through when
/// `in_tmux` is set.
pub fn osc52_sequence(text: &str, in_tmux: bool) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if in_tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn try_osc52_copy(text: &str) -> std::io::Result<()> {
	let sequence = osc52_sequence(text, std::env::var_os("TMUX").is_some());
	let mut stdout = std::io::stdout().lock();
	stdout.write_all(sequence.as_bytes())?;
	stdout.flush()
}

fn try_native_clipboard(text: &str) -> Result<(), ClipboardError> {
	let try_command = |cmd: &str, args: &[&str]| -> bool {
		Command::new(cmd)
			.args(args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.ok()
			.and_then(|mut child| {
				let written = child
					.stdin
					.take()
					.map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
					.unwrap_or(false);
				if written {
					child.wait().ok().filter(|status| status.success())
				} else {
					None
				}
			})
			.is_some()
	};

	if std::env::var_os("WAYLAND_DISPLAY").is_some() && try_command("wl-copy", &[]) {
		return Ok(());
	}

	if try_command("xclip", &["-selection", "clipboard"]) {
		return Ok(());
	}

	if try_command("xsel", &["--clipboard", "--input"]) {
		return Ok(());
	}

	if try_command("pbcopy", &[]) {
		return Ok(());
	}

	Err(ClipboardError::Unavailable)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn osc52_encodes_payload() {
		assert_eq!(osc52_sequence("hi", false), "\x1b]52;c;aGk=\x07");
	}

	#[test]
	fn osc52_error_surfaces_when_no_native_tool_works() {
		let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
		let result = copy_with_fallback(Err(err), || Err(ClipboardError::Unavailable));
		match result {
			Err(ClipboardError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe),
			other => panic!("expected io error, got {other:?}"),
		}
	}

	#[test]
	fn native_tool_covers_failed_osc52() {
		let err = std::io::Error::other("closed");
		assert!(copy_with_fallback(Err(err), || Ok(())).is_ok());
	}

	#[test]
	fn osc52_wraps_for_tmux() {
		let sequence = osc52_sequence("hi", true);
		assert!(sequence.starts_with("\x1bPtmux;\x1b\x1b]52;c;aGk="));
		assert!(sequence.ends_with("\x07\x1b\\"));
	}
}
