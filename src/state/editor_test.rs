use super::*;
use storage::MemoryStore;

fn typed(text: &str) -> EditorState {
    let mut editor = EditorState::default();
    editor.replace_text(text, None);
    editor
}

fn runs(editor: &EditorState, block: usize) -> Vec<TextRun> {
    editor.document().blocks()[block].children().to_vec()
}

// =============================================================
// Text editing
// =============================================================

#[test]
fn default_editor_has_one_empty_paragraph() {
    let editor = EditorState::default();
    assert_eq!(editor.document(), &EditorDocument::default());
    assert_eq!(editor.plain_text(), "");
    assert_eq!(editor.font_size, FontSize::Medium);
}

#[test]
fn typing_places_caret_after_insert() {
    let editor = typed("Hello");
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("Hello")]);
    assert_eq!(editor.selection(), Selection::caret(5));
}

#[test]
fn newline_splits_paragraphs() {
    let editor = typed("ab\ncd");
    assert_eq!(editor.document().blocks().len(), 2);
    assert_eq!(editor.document().blocks()[1].text(), "cd");
}

#[test]
fn deleting_across_paragraphs_joins_them() {
    let mut editor = typed("ab\ncd");
    editor.replace_text("ad", None);
    assert_eq!(editor.document().blocks().len(), 1);
    assert_eq!(editor.plain_text(), "ad");
    assert_eq!(editor.selection(), Selection::caret(1));
}

#[test]
fn clearing_text_keeps_one_empty_run() {
    let mut editor = typed("abc");
    editor.replace_text("", None);
    assert_eq!(editor.document(), &EditorDocument::default());
}

#[test]
fn typed_text_inherits_style_before_caret() {
    let mut editor = typed("Hello world");
    editor.set_selection(6, 11);
    editor.toggle_mark(Mark::Bold);
    editor.replace_text("Hello world!", None);
    assert_eq!(
        runs(&editor, 0),
        vec![TextRun::plain("Hello "), TextRun::plain("world!").with_mark(Mark::Bold)]
    );
}

#[test]
fn unchanged_characters_keep_their_marks_around_an_edit() {
    let mut editor = typed("abcdef");
    editor.set_selection(0, 2);
    editor.toggle_mark(Mark::Italic);
    editor.set_selection(4, 6);
    editor.toggle_mark(Mark::Underline);
    editor.replace_text("abXYef", None);
    assert_eq!(
        runs(&editor, 0),
        vec![
            TextRun::plain("abXY").with_mark(Mark::Italic),
            TextRun::plain("ef").with_mark(Mark::Underline),
        ]
    );
}

#[test]
fn caret_pins_pending_mark_when_typed_char_repeats_its_neighbour() {
    let mut editor = typed("ab");
    editor.set_selection(1, 1);
    editor.toggle_mark(Mark::Bold);
    editor.replace_text("abb", Some(2));
    assert_eq!(
        runs(&editor, 0),
        vec![TextRun::plain("a"), TextRun::plain("b").with_mark(Mark::Bold), TextRun::plain("b")]
    );
    assert_eq!(editor.selection(), Selection::caret(2));
}

#[test]
fn caret_pins_inherited_style_when_typed_char_repeats_its_neighbour() {
    let mut editor = typed("ab");
    editor.set_selection(1, 2);
    editor.toggle_mark(Mark::Bold);
    editor.set_selection(1, 1);
    editor.replace_text("abb", Some(2));
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("ab"), TextRun::plain("b").with_mark(Mark::Bold)]);
}

#[test]
fn caret_pins_deletion_of_repeated_char() {
    let mut editor = typed("abb");
    editor.set_selection(2, 3);
    editor.toggle_mark(Mark::Italic);
    // Backspace after the first `b`.
    editor.replace_text("ab", Some(1));
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("a"), TextRun::plain("b").with_mark(Mark::Italic)]);
    assert_eq!(editor.selection(), Selection::caret(1));
}

// =============================================================
// Marks
// =============================================================

#[test]
fn toggle_mark_on_selection_adds_then_removes() {
    let mut editor = typed("Hello world");
    editor.set_selection(6, 11);
    assert!(!editor.is_mark_active(Mark::Bold));

    editor.toggle_mark(Mark::Bold);
    assert!(editor.is_mark_active(Mark::Bold));
    assert_eq!(
        runs(&editor, 0),
        vec![TextRun::plain("Hello "), TextRun::plain("world").with_mark(Mark::Bold)]
    );

    editor.toggle_mark(Mark::Bold);
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("Hello world")]);
}

#[test]
fn partially_marked_selection_is_inactive_and_toggle_marks_all() {
    let mut editor = typed("Hello world");
    editor.set_selection(6, 11);
    editor.toggle_mark(Mark::Bold);
    editor.set_selection(0, 11);
    assert!(!editor.is_mark_active(Mark::Bold));
    editor.toggle_mark(Mark::Bold);
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("Hello world").with_mark(Mark::Bold)]);
}

#[test]
fn selection_spanning_paragraphs_restyles_both() {
    let mut editor = typed("ab\ncd");
    editor.set_selection(1, 4);
    editor.toggle_mark(Mark::Underline);
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("a"), TextRun::plain("b").with_mark(Mark::Underline)]);
    assert_eq!(runs(&editor, 1), vec![TextRun::plain("c").with_mark(Mark::Underline), TextRun::plain("d")]);
}

#[test]
fn collapsed_toggle_applies_to_next_typed_text() {
    let mut editor = typed("ab");
    editor.toggle_mark(Mark::Italic);
    assert!(editor.is_mark_active(Mark::Italic));
    editor.replace_text("abc", None);
    assert_eq!(runs(&editor, 0), vec![TextRun::plain("ab"), TextRun::plain("c").with_mark(Mark::Italic)]);
}

#[test]
fn moving_the_caret_drops_pending_marks() {
    let mut editor = typed("ab");
    editor.toggle_mark(Mark::Bold);
    editor.set_selection(1, 1);
    assert!(!editor.is_mark_active(Mark::Bold));
}

#[test]
fn font_size_applies_to_selection_and_toolbar() {
    let mut editor = typed("big small");
    editor.set_selection(0, 3);
    editor.apply_font_size(FontSize::Large);
    assert_eq!(editor.font_size, FontSize::Large);
    assert_eq!(
        runs(&editor, 0),
        vec![
            TextRun { font_size: Some(FontSize::Large), ..TextRun::plain("big") },
            TextRun::plain(" small"),
        ]
    );
}

#[test]
fn selection_is_ordered_and_clamped() {
    let mut editor = typed("abc");
    editor.set_selection(10, 1);
    assert_eq!(editor.selection(), Selection { start: 1, end: 3 });
}

#[test]
fn utf16_offsets_convert_to_char_offsets() {
    assert_eq!(char_offset_from_utf16("a\u{1F600}b", 0), 0);
    assert_eq!(char_offset_from_utf16("a\u{1F600}b", 3), 2);
    assert_eq!(char_offset_from_utf16("a\u{1F600}b", 4), 3);
    assert_eq!(char_offset_from_utf16("abc", 99), 3);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn save_then_load_restores_document() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    let mut editor = typed("Hello world");
    editor.set_selection(0, 5);
    editor.toggle_mark(Mark::Bold);
    editor.save(&gateway).expect("save");
    assert_eq!(editor.status, SaveStatus::Saved);

    let reloaded = EditorState::load(&gateway);
    assert_eq!(reloaded.document(), editor.document());
    assert_eq!(reloaded.selection(), Selection::caret(0));
}

#[test]
fn edits_are_not_persisted_until_save() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    let mut editor = EditorState::load(&gateway);
    editor.replace_text("draft", None);
    assert!(!store.contains_key(keys::EDITOR_CONTENT));
}

#[test]
fn zero_block_record_loads_as_default_document() {
    let store = MemoryStore::new();
    store.insert_raw(keys::EDITOR_CONTENT, "[]");
    let editor = EditorState::load(&StorageGateway::new(&store));
    assert_eq!(editor.document(), &EditorDocument::default());
}

#[test]
fn failed_save_reports_and_keeps_stored_document() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    let mut editor = typed("first");
    editor.save(&gateway).expect("save");
    let stored = store.raw(keys::EDITOR_CONTENT);

    store.set_quota(Some(store.usage()));
    editor.replace_text("first and a much longer second draft", None);
    assert!(editor.save(&gateway).is_err());
    assert!(editor.status.failure().is_some());
    assert_eq!(store.raw(keys::EDITOR_CONTENT), stored);
}

#[test]
fn reset_clears_state_and_stored_document() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    let mut editor = typed("text");
    editor.apply_font_size(FontSize::Small);
    editor.save(&gateway).expect("save");

    editor.reset(&gateway);
    assert_eq!(editor.document(), &EditorDocument::default());
    assert_eq!(editor.selection(), Selection::caret(0));
    assert_eq!(editor.font_size, FontSize::Medium);
    assert!(!store.contains_key(keys::EDITOR_CONTENT));
}
