//! Built-in showcase, run by `lonker --demo`.

use std::thread;
use std::time::Duration;

use serde_json::json;

use crate::color::ConsoleColor;
use crate::error::Result;
use crate::formatter::Lonker;
use crate::label::LabelKind;
use crate::options::PartialOptions;

/// Walk through every channel, label kind and delimiter option.
///
/// `pause` is how long the timer section waits between its two lines.
pub fn run(out: &mut Lonker, pause: Duration) -> Result<()> {
    let initial = out.options().clone();

    out.log("Simple log()")?;
    out.info("Simple info() (bright cyan by default)")?;
    out.warn("Simple warn()")?;
    out.error("Simple error()")?;

    out.open_group(Some("A group!"))?;
    out.log("log() inside group")?;
    out.close_group();

    out.open_label("A simple label", None, None, None);
    out.log("log() inside label")?;
    out.close_label();

    out.open_label("", Some(ConsoleColor::BrightGreen), Some(false), Some(LabelKind::DateTime));
    out.log("datetime label (default format)")?;
    out.close_label();

    out.open_label("", Some(ConsoleColor::BrightYellow), Some(false), Some(LabelKind::Time));
    out.log("time label (default format)")?;
    out.close_label();

    out.open_label(
        "dd/MM/yyyy HH:mm:ss:SSS",
        Some(ConsoleColor::BrightBlue),
        Some(false),
        Some(LabelKind::DateTime),
    );
    out.log("datetime label (custom format)")?;
    out.close_label();

    out.open_label("%d msec", Some(ConsoleColor::BrightMagenta), Some(false), Some(LabelKind::Timer));
    out.log("timer label")?;
    thread::sleep(pause);
    out.log(format!("timer label after {}ms pause", pause.as_millis()))?;
    out.log(".. and then right afterwards")?;
    out.close_label();

    out.open_label("Coloured label", Some(ConsoleColor::Yellow), None, None);
    out.log("log() inside label")?;
    out.close_label();

    out.open_label("Coloured bold label", Some(ConsoleColor::BrightRed), Some(true), None);
    out.log("log() inside label")?;
    out.close_label();

    out.open_label("Label 1", Some(ConsoleColor::White), Some(true), None);
    out.open_label("Label 2", Some(ConsoleColor::Cyan), Some(false), None);
    out.log("log() inside two labels")?;
    out.close_label();
    out.close_label();

    out.open_label("Structured value", Some(ConsoleColor::White), Some(false), None);
    out.log(json!([{
        "stringProperty": "value",
        "numericProperty": 2.5,
        "stringArrayProperty": ["andy", "rocks"],
        "numericArrayProperty": [1, 2],
    }]))?;
    out.close_label();

    out.set_options(Some(PartialOptions {
        label_separator: Some("_|_".to_string()),
        label_separator_color: Some(ConsoleColor::BrightBlue),
        label_separator_bold: Some(true),
        label_start: Some("<".to_string()),
        label_end: Some(">".to_string()),
        label_terminator: Some("#: ".to_string()),
        label_terminator_color: Some(ConsoleColor::BrightMagenta),
        label_terminator_bold: Some(true),
        label_start_color: Some(ConsoleColor::BrightYellow),
        label_end_color: Some(ConsoleColor::BrightGreen),
        ..PartialOptions::default()
    }));

    out.open_label("Label1", Some(ConsoleColor::White), Some(true), None);
    out.open_label("Label2", Some(ConsoleColor::Cyan), Some(false), None);
    out.log("Customisable label start, end, separator and terminator")?;
    out.close_label();
    out.close_label();

    out.set_options(Some(initial.into()));

    out.open_label("numeric array", Some(ConsoleColor::BrightBlack), Some(false), None);
    out.log(json!([1, 2, 3]))?;
    out.close_label();

    out.open_label("string array", Some(ConsoleColor::BrightBlack), Some(false), None);
    out.log(json!(["andy", "rocks"]))?;
    out.close_label();

    out.verbose("verbose() only shows with --verbose")?;
    Ok(())
}
