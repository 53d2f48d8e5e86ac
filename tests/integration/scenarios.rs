//! End-to-end behavior of the library API against an in-memory sink and a
//! hand-driven clock.

use jiff::SignedDuration;
use lonker::style::styled;
use lonker::{
    Channel, ConsoleColor, LabelKind, Lonker, ManualClock, MemorySink, PartialOptions, Value,
};
use serde_json::json;

use crate::strip_ansi;

fn setup() -> (Lonker, MemorySink, ManualClock) {
    let sink = MemorySink::new();
    let clock = ManualClock::at_millis(1_768_473_000_000);
    let out = Lonker::builder()
        .sink(sink.clone())
        .clock(clock.clone())
        .args(["test"])
        .build();
    (out, sink, clock)
}

#[test]
fn default_emit_is_just_styled_text() {
    let (mut out, sink, _) = setup();
    out.log("hello").unwrap();
    assert_eq!(sink.lines(), vec![styled("hello", ConsoleColor::White, false)]);
}

#[test]
fn label_scenario_exact_output() {
    let (mut out, sink, _) = setup();
    out.open_label("A", None, None, None);
    out.log("x").unwrap();
    out.close_label();

    let expected = [
        styled("[", ConsoleColor::White, true),
        styled("A", ConsoleColor::White, false),
        styled("]", ConsoleColor::White, true),
        styled(" ", ConsoleColor::White, false),
        styled("x", ConsoleColor::White, false),
    ]
    .concat();
    assert_eq!(sink.lines(), vec![expected]);
    assert_eq!(strip_ansi(&sink.lines()[0]), "[A] x");
}

#[test]
fn timer_label_renders_elapsed_millis() {
    let (mut out, sink, clock) = setup();
    out.open_label("", Some(ConsoleColor::White), Some(false), Some(LabelKind::Timer));
    clock.advance(SignedDuration::from_millis(100));
    out.log("done").unwrap();
    assert_eq!(strip_ansi(&sink.lines()[0]), "[100] done");
}

#[test]
fn timer_label_rerenders_per_emit() {
    let (mut out, sink, clock) = setup();
    out.open_label("%d msec", None, None, Some(LabelKind::Timer));
    out.log("start").unwrap();
    clock.advance(SignedDuration::from_millis(50));
    out.log("later").unwrap();
    let lines: Vec<String> = sink.lines().iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(lines, vec!["[0 msec] start", "[50 msec] later"]);
}

#[test]
fn datetime_and_time_labels() {
    let (mut out, sink, _) = setup();
    out.open_label("", None, None, Some(LabelKind::DateTime));
    out.open_label("", None, None, Some(LabelKind::Time));
    out.log("now").unwrap();
    assert_eq!(strip_ansi(&sink.lines()[0]), "[Jan 15 10:30:00][10:30:00.000] now");
}

#[test]
fn group_scenario() {
    let (mut out, sink, _) = setup();
    out.open_group(Some("g")).unwrap();
    out.log("inner").unwrap();
    out.close_group();
    out.log("outer").unwrap();
    let lines: Vec<String> = sink.lines().iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(lines, vec!["g", "  inner", "outer"]);
}

#[test]
fn groups_and_labels_compose() {
    let (mut out, sink, _) = setup();
    out.open_label("L", None, None, None);
    out.open_group(Some("head")).unwrap();
    out.open_group(None).unwrap();
    out.log("body").unwrap();
    out.close_label();
    out.log("no label").unwrap();
    let lines: Vec<String> = sink.lines().iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(lines, vec!["[L] head", "[L]     body", "    no label"]);
}

#[test]
fn falsy_values_reach_sink_unchanged() {
    let (mut out, sink, _) = setup();
    out.open_label("ignored", None, None, None);
    out.log(0).unwrap();
    out.log("").unwrap();
    out.log(false).unwrap();
    let values: Vec<Value> = sink.records().into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec![Value::Int(0), Value::from(""), Value::Bool(false)]);
}

#[test]
fn multi_line_values_repeat_prefix() {
    let (mut out, sink, _) = setup();
    out.open_label("L", None, None, None);
    out.open_group(None).unwrap();
    out.log("a\nb\nc\n").unwrap();
    let text = strip_ansi(&sink.lines()[0]);
    assert_eq!(text, "[L]   a\n[L]   b\n[L]   c\n[L]   ");
}

#[test]
fn structured_values_are_inspected_per_line() {
    let (mut out, sink, _) = setup();
    out.open_label("obj", None, None, None);
    out.log(json!([{ "name": "value", "tags": ["andy", "rocks"] }])).unwrap();
    let text = strip_ansi(&sink.lines()[0]);
    assert_eq!(
        text,
        "[obj] [\n[obj]   {\n[obj]     name: 'value',\n[obj]     tags: [ 'andy', 'rocks' ]\n[obj]   }\n[obj] ]"
    );
}

#[test]
fn custom_delimiters() {
    let (mut out, sink, _) = setup();
    out.set_options(Some(PartialOptions {
        label_separator: Some("_|_".to_string()),
        label_start: Some("<".to_string()),
        label_end: Some(">".to_string()),
        label_terminator: Some("#: ".to_string()),
        ..PartialOptions::default()
    }));
    out.open_label("Label1", None, Some(true), None);
    out.open_label("Label2", Some(ConsoleColor::Cyan), None, None);
    out.log("x").unwrap();
    assert_eq!(strip_ansi(&sink.lines()[0]), "<Label1>_|_<Label2>#: x");
    assert!(sink.lines()[0].contains(&styled("Label1", ConsoleColor::White, true)));
    assert!(sink.lines()[0].contains(&styled("Label2", ConsoleColor::Cyan, false)));
}

#[test]
fn close_label_on_empty_stack_is_none() {
    let (mut out, _, _) = setup();
    assert!(out.close_label().is_none());
    out.open_label("a", None, None, None);
    assert_eq!(out.close_label().map(|l| l.text), Some("a".to_string()));
    assert!(out.close_label().is_none());
}

#[test]
fn close_group_never_negative() {
    let (mut out, _, _) = setup();
    for _ in 0..10 {
        assert_eq!(out.close_group(), 0);
    }
}

#[test]
fn set_options_getter_and_round_trip() {
    let (mut out, _, _) = setup();
    let snapshot = out.set_options(None);
    assert_eq!(&snapshot, out.options());
    let again = out.set_options(Some(snapshot.clone().into()));
    assert_eq!(again, snapshot);
}

#[test]
fn verbose_variants_skip_without_trace() {
    let (mut out, sink, _) = setup();
    out.emit_verbose(Channel::Warn, "w", None, None).unwrap();
    out.info_verbose("i").unwrap();
    assert!(sink.records().is_empty());
}

#[test]
fn verbose_flag_forces_verbose_on() {
    let sink = MemorySink::new();
    let mut out = Lonker::builder()
        .sink(sink.clone())
        .args(["test", "--verbose"])
        .build();
    out.warn_verbose("seen").unwrap();
    assert_eq!(sink.records().len(), 1);
    assert_eq!(sink.records()[0].channel, Channel::Warn);
}
