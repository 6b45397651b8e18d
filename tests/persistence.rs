use runedit::document::{Document, DocumentError, LineEnding, read_lines, write_lines};
use runedit::editor::EditorBuffer;

#[test]
fn test_save_writes_one_record_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let doc = Document::from_lines(["x", "", "y"]);

    write_lines(&path, &doc, LineEnding::Lf).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n\ny\n");

    write_lines(&path, &doc, LineEnding::Crlf).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\r\n\r\ny\r\n");
}

#[test]
fn test_saved_file_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let mut buf = EditorBuffer::from_lines(["alpha", "", "  gamma  ", "δέλτα"]);
    buf.move_to(1, 0);
    buf.insert_char('b');

    write_lines(&path, buf.document(), LineEnding::Crlf).unwrap();
    let loaded = read_lines(&path).unwrap();
    assert_eq!(loaded, buf.lines());
}

#[test]
fn test_empty_file_loads_as_one_empty_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();
    assert_eq!(read_lines(&path).unwrap(), vec![String::new()]);
}

#[test]
fn test_failed_load_leaves_buffer_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let mut buf = EditorBuffer::from_lines(["keep", "me"]);
    buf.move_to(1, 2);

    let err = read_lines(&missing).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, DocumentError::Read { .. }));

    assert_eq!(buf.lines(), vec!["keep", "me"]);
    assert_eq!(buf.cursor().line, 1);
    assert_eq!(buf.cursor().col, 2);
    assert!(!buf.can_undo());
}

#[test]
fn test_failed_write_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.txt");
    let err = write_lines(&path, &Document::new(), LineEnding::Lf).unwrap_err();
    assert!(matches!(err, DocumentError::Write { .. }));
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("dir.txt"));
}

#[test]
fn test_load_document_is_undoable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("next.txt");
    std::fs::write(&path, "new\ncontent\n").unwrap();

    let mut buf = EditorBuffer::from_lines(["old"]);
    buf.load_document(read_lines(&path).unwrap());
    assert_eq!(buf.lines(), vec!["new", "content"]);
    assert!(!buf.is_dirty());

    assert!(buf.undo());
    assert_eq!(buf.lines(), vec!["old"]);
}
