use pixed::{test_support::MemoryTarget, Editor, EditorError, WriterTarget};
use std::io::{self, Write};
use pretty_assertions::assert_eq;

#[test]
fn show_emits_current_canvas() {
    let mut editor = Editor::with_target(3, 2, MemoryTarget::new()).unwrap();
    editor.execute("L 2 1 A").unwrap().execute("S").unwrap();
    editor.execute("H 1 3 2 B").unwrap().execute("S").unwrap();
    let frames = &editor.target().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], vec!["OAO", "OOO"]);
    assert_eq!(frames[1], vec!["OAO", "BBB"]);
    assert_eq!(editor.target().last_frame().unwrap(), editor.render());
}

#[test]
fn show_does_not_mutate() {
    let mut editor = Editor::with_target(2, 2, MemoryTarget::new()).unwrap();
    editor.execute("L 1 2 X").unwrap();
    let before = editor.render();
    editor.execute("S").unwrap().execute("S").unwrap();
    assert_eq!(editor.render(), before);
}

#[test]
fn writer_target_prints_lines_with_trailing_newline() {
    let mut editor = Editor::with_target(5, 6, WriterTarget::new(Vec::new())).unwrap();
    editor
        .execute("I 5 6")
        .unwrap()
        .execute("L 2 3 A")
        .unwrap()
        .execute("S")
        .unwrap()
        .execute("I 2 1")
        .unwrap()
        .execute("S")
        .unwrap();
    let out = String::from_utf8(editor.into_target().into_inner()).unwrap();
    assert_eq!(out, "OOOOO\nOOOOO\nOAOOO\nOOOOO\nOOOOO\nOOOOO\nOO\n");
}

#[test]
fn render_of_unicode_colors() {
    let mut editor = Editor::with_target(2, 1, WriterTarget::new(Vec::new())).unwrap();
    editor.execute("L 1 1 █").unwrap().execute("S").unwrap();
    assert_eq!(editor.render(), "█O");
    let out = String::from_utf8(editor.into_target().into_inner()).unwrap();
    assert_eq!(out, "█O\n");
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn show_failure_carries_target_error() {
    let mut editor = Editor::with_target(2, 2, WriterTarget::new(ClosedPipe)).unwrap();
    let err = editor.execute("S").err().unwrap();
    assert_eq!(err, EditorError::Target("pipe closed".into()));
    assert_eq!(err.to_string(), "display target failed: pipe closed");
}
