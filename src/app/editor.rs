//! Editor session for creating and editing one entry.
//!
//! The session holds an edit buffer separate from the store. Nothing reaches the
//! store until the session is saved; cancelling drops the buffer and, for blank
//! new drafts, removes the draft.

use super::modes::EditorField;
use crate::domain::{Entry, EntryId};

/// How the session was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
    /// Opened on a draft just created by the new-entry intent.
    NewDraft,
    /// Opened on an entry that already existed.
    Existing,
}

/// In-progress edit of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    base: Entry,
    origin: EditOrigin,
    pub title: String,
    pub body: String,
    pub focus: EditorField,
}

impl EditorSession {
    /// Opens a session on a snapshot, with the buffer initialised from its text.
    #[must_use]
    pub fn open(entry: Entry, origin: EditOrigin) -> Self {
        Self {
            title: entry.title.clone(),
            body: entry.body.clone(),
            focus: EditorField::Title,
            base: entry,
            origin,
        }
    }

    /// Id of the entry being edited.
    #[must_use]
    pub const fn entry_id(&self) -> EntryId {
        self.base.id()
    }

    #[must_use]
    pub const fn origin(&self) -> EditOrigin {
        self.origin
    }

    /// The snapshot the session was opened on.
    #[must_use]
    pub const fn base(&self) -> &Entry {
        &self.base
    }

    /// Saving requires a non-blank body.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Returns `true` if the buffer differs from the snapshot it was opened on.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.title != self.base.title || self.body != self.base.body
    }

    /// Snapshot carrying the buffer text, with the original id and bookmark flag.
    #[must_use]
    pub fn compose(&self) -> Entry {
        self.base.with_text(self.title.clone(), self.body.clone())
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Enter key: moves from title to body, or breaks the body line.
    pub fn newline(&mut self) {
        match self.focus {
            EditorField::Title => self.focus = EditorField::Body,
            EditorField::Body => self.body.push('\n'),
        }
    }

    /// Switches focus between title and body.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Title => &mut self.title,
            EditorField::Body => &mut self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut session = EditorSession::open(Entry::blank(), EditOrigin::NewDraft);

        "Trip".chars().for_each(|c| session.push_char(c));
        session.newline();
        "Paris".chars().for_each(|c| session.push_char(c));
        session.newline();
        session.push_char('!');
        session.backspace();

        assert_eq!(session.title, "Trip");
        assert_eq!(session.body, "Paris\n");
        assert!(session.is_dirty());
    }

    #[test]
    fn save_requires_non_blank_body() {
        let mut session = EditorSession::open(Entry::new("Title only", ""), EditOrigin::Existing);
        assert!(!session.can_save());

        session.toggle_focus();
        session.push_char(' ');
        assert!(!session.can_save());

        session.push_char('x');
        assert!(session.can_save());
    }

    #[test]
    fn compose_keeps_id_and_bookmark() {
        let entry = Entry::new("a", "b").bookmarked(true);
        let mut session = EditorSession::open(entry.clone(), EditOrigin::Existing);
        session.title = "changed".to_string();

        let composed = session.compose();
        assert_eq!(composed.id(), entry.id());
        assert!(composed.is_bookmarked);
        assert_eq!(composed.title, "changed");
    }
}
