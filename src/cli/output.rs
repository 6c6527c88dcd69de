use anyhow::Result;
use discolor::ComposeOutcome;

/// Print the generated block, or a note on stderr when nothing was generated.
pub(crate) fn print_plain(outcome: &ComposeOutcome) {
	match &outcome.rendered {
		Some(rendered) => println!("{rendered}"),
		None => eprintln!("No formatted text generated"),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ComposeOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &ComposeOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_keeps_raw_escapes() {
		let outcome = ComposeOutcome {
			buffer: "\u{1b}[38;2;255;0;0mhi\u{1b}[0m".into(),
			rendered: Some("```ansi\n\u{1b}[38;2;255;0;0mhi\u{1b}[0m\n```".into()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		assert!(json.contains("\\u001b[38;2;255;0;0m"));
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["buffer"], outcome.buffer.as_str());
		assert_eq!(value["rendered"], outcome.rendered.as_deref().unwrap());
	}

	#[test]
	fn json_format_reports_missing_render_as_null() {
		let outcome = ComposeOutcome {
			buffer: "plain".into(),
			rendered: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert!(value["rendered"].is_null());
	}
}
