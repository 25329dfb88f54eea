//! Local note-browsing state.
//!
//! Holds the loaded note set plus the search text and selected tag, and
//! filters purely locally: a note matches when its title or content
//! contains the search text case-insensitively AND (no tag is selected OR
//! the note carries the selected tag). The tag index is derived from the
//! loaded notes whenever they change, never persisted independently.

use quill_types::Note;

/// Client-side state for browsing a note collection.
#[derive(Debug, Default)]
pub struct NoteBrowser {
    notes: Vec<Note>,
    search: String,
    selected_tag: Option<String>,
}

impl NoteBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded note set, e.g. after a re-fetch.
    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Sets the search text; empty means no text filter.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Selects a tag filter, or clears it with `None`.
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag;
    }

    /// The tag index derived from the loaded notes: union of all tags,
    /// first-seen order, duplicates collapsed.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for note in &self.notes {
            for tag in &note.tags {
                if !tags.contains(&tag.as_str()) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    /// The loaded notes that pass the current search and tag filters, in
    /// load order.
    pub fn filtered(&self) -> Vec<&Note> {
        self.notes.iter().filter(|note| self.matches(note)).collect()
    }

    fn matches(&self, note: &Note) -> bool {
        let text_matches = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            let in_title = note
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle));
            let in_content = note
                .content
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            in_title || in_content
        };
        let tag_matches = match &self.selected_tag {
            None => true,
            Some(tag) => note.tags.iter().any(|t| t == tag),
        };
        text_matches && tag_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quill_types::{NoteId, OwnerId};

    fn note(title: Option<&str>, content: Option<&str>, tags: &[&str]) -> Note {
        let now = Utc::now();
        Note {
            id: NoteId::new(),
            owner_id: OwnerId::new("u1").unwrap(),
            title: title.map(Into::into),
            content: content.map(Into::into),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    fn browser(notes: Vec<Note>) -> NoteBrowser {
        let mut browser = NoteBrowser::new();
        browser.set_notes(notes);
        browser
    }

    #[test]
    fn empty_search_and_no_tag_matches_everything() {
        let b = browser(vec![
            note(Some("a"), None, &[]),
            note(None, Some("<p>b</p>"), &["x"]),
        ]);
        assert_eq!(b.filtered().len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let mut b = browser(vec![
            note(Some("Groceries"), None, &[]),
            note(None, Some("<p>buy GROCERIES</p>"), &[]),
            note(Some("other"), Some("<p>unrelated</p>"), &[]),
        ]);
        b.set_search("groceries");
        assert_eq!(b.filtered().len(), 2);
    }

    #[test]
    fn tag_filter_combines_with_search() {
        let mut b = browser(vec![
            note(Some("milk run"), None, &["home"]),
            note(Some("milk contract"), None, &["work"]),
            note(Some("standup"), None, &["work"]),
        ]);
        b.set_search("milk");
        b.select_tag(Some("work".into()));
        let matched = b.filtered();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title.as_deref(), Some("milk contract"));
    }

    #[test]
    fn notes_without_title_or_content_do_not_match_text_search() {
        let mut b = browser(vec![note(None, None, &["home"])]);
        b.set_search("anything");
        assert!(b.filtered().is_empty());
    }

    #[test]
    fn tags_are_deduplicated_in_first_seen_order() {
        let b = browser(vec![
            note(Some("a"), None, &["home", "urgent"]),
            note(Some("b"), None, &["work", "home"]),
        ]);
        assert_eq!(b.tags(), vec!["home", "urgent", "work"]);
    }

    #[test]
    fn tag_index_follows_reloads() {
        let mut b = browser(vec![note(Some("a"), None, &["home"])]);
        assert_eq!(b.tags(), vec!["home"]);
        b.set_notes(vec![note(Some("b"), None, &["work"])]);
        assert_eq!(b.tags(), vec!["work"]);
    }
}
