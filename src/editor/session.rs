//! EditSession - the INSERT/COMPLETION state machine over a text input.
//!
//! The session owns the widget, both vocabularies, the current mode and the
//! deferred task queue. Change notifications from the widget are read-only:
//! they classify the edit, consult the resolver, and schedule at most one
//! task; the host loop calls `pump` on its next turn to apply whatever was
//! scheduled. Input drivers (`type_char` and friends) play the widget's
//! part for hosts and tests that have no real widget.

use std::ops::Range;

use super::buffer::TextInput;
use super::classify::{self, classify_insertion, InsertClass};
use super::queue::{EditTask, TaskQueue};
use super::resolver::resolve;
use super::selection::Selection;
use super::vocabulary::Vocabulary;
use crate::config::EditorConfig;

/// Completion state of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Ordinary typing; the initial and reset state
    #[default]
    Insert,
    /// A staged suggestion sits selected in the buffer, awaiting a commit
    /// or replacement by further typing
    Completion,
}

/// Single-line edit session with live completion and pair balancing.
///
/// Generic over the widget type W (LineBuffer for the built-in buffer, or
/// any host widget satisfying `TextInput`).
#[derive(Debug)]
pub struct EditSession<W: TextInput> {
    widget: W,
    /// Fixed function/keyword vocabulary
    global: Vocabulary,
    /// Per-document identifier vocabulary, republished on document change
    context: Vocabulary,
    mode: EditMode,
    queue: TaskQueue,
    config: EditorConfig,
}

impl<W: TextInput> EditSession<W> {
    /// Create a session over `widget` with default configuration
    pub fn new(widget: W) -> Self {
        Self::with_config(widget, EditorConfig::default())
    }

    pub fn with_config(widget: W, config: EditorConfig) -> Self {
        Self {
            widget,
            global: Vocabulary::jq_builtins(),
            context: Vocabulary::new(),
            mode: EditMode::Insert,
            queue: TaskQueue::new(),
            config,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// Get the buffer text
    pub fn text(&self) -> String {
        self.widget.text()
    }

    /// Get the caret offset
    pub fn caret(&self) -> usize {
        self.widget.caret()
    }

    /// Get the current selection
    pub fn selection(&self) -> Selection {
        self.widget.selection()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Number of scheduled-but-unapplied tasks
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    // =========================================================================
    // Vocabulary management
    // =========================================================================

    /// Replace the per-document vocabulary wholesale. The owning panel
    /// calls this whenever the source document changes.
    pub fn publish_context_vocabulary<I, S>(&mut self, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.replace(identifiers);
        tracing::debug!(
            "Context vocabulary replaced ({} entries)",
            self.context.len()
        );
    }

    /// Add one identifier to the per-document vocabulary
    pub fn add_identifier(&mut self, identifier: impl Into<String>) {
        self.context.add(identifier);
    }

    /// Drop all per-document identifiers
    pub fn clear_context_vocabulary(&mut self) {
        self.context.clear();
    }

    pub fn context_vocabulary(&self) -> &Vocabulary {
        &self.context
    }

    pub fn global_vocabulary(&self) -> &Vocabulary {
        &self.global
    }

    // =========================================================================
    // Notification entry points (called by the widget, read-only)
    // =========================================================================

    /// React to a single-character insertion the widget already applied.
    ///
    /// Called synchronously once per atomic edit, before control returns to
    /// the widget. Never mutates the buffer here: reactions are scheduled
    /// on the queue and applied by the next `pump`.
    pub fn on_char_inserted(&mut self, pos: usize, ch: char) {
        match classify_insertion(&self.widget, pos, ch) {
            InsertClass::SkipClose => {
                tracing::trace!("Skip close {:?} at {}", ch, pos);
                self.mode = EditMode::Insert;
                self.queue.schedule(EditTask::AbsorbCloser { pos: pos + 1 });
            }
            InsertClass::AutoPair { closer } => {
                self.mode = EditMode::Insert;
                if self.config.auto_pair {
                    tracing::trace!("Auto-pair {:?} at {}", ch, pos);
                    self.queue.schedule(EditTask::InsertCloser {
                        pos: pos + 1,
                        closer,
                    });
                }
            }
            InsertClass::Word => {
                let found = resolve(
                    &self.widget,
                    pos + 1,
                    self.config.trigger,
                    &self.global,
                    &self.context,
                );
                match found {
                    Some(suggestion) => {
                        tracing::debug!(
                            "Staging completion {:?} at {}",
                            suggestion.text,
                            suggestion.anchor
                        );
                        self.queue.schedule(EditTask::StageSuggestion {
                            pos: suggestion.anchor,
                            text: suggestion.text,
                        });
                    }
                    None => {
                        self.mode = EditMode::Insert;
                    }
                }
            }
            InsertClass::Inert => {
                self.mode = EditMode::Insert;
            }
        }
    }

    /// React to a removal the widget already applied. Whatever suggestion
    /// was pending went with the removed text, so completion mode ends.
    pub fn on_range_removed(&mut self, offset: usize, len: usize) {
        if self.mode == EditMode::Completion {
            tracing::trace!("Removal of {} chars at {} ends completion", len, offset);
            self.mode = EditMode::Insert;
        }
    }

    /// Widen a pending removal over an empty pair.
    ///
    /// Hosts with a pre-edit filter stage call this before applying a
    /// removal, so deleting `(` out of `()` takes the `)` along.
    pub fn removal_span(&self, offset: usize, len: usize) -> Range<usize> {
        classify::removal_span(&self.widget, offset, len)
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Resolve the commit keystroke.
    ///
    /// In COMPLETION mode the staged suggestion is accepted: the selection
    /// collapses and the caret lands at its end, or one position earlier
    /// when the accepted text ends in `)` so arguments can be typed right
    /// away. In INSERT mode the configured fallback text (a literal tab by
    /// default) replaces the selection.
    pub fn commit(&mut self) {
        // Commit is an action, not a notification: anything still pending
        // from the triggering keystroke lands first.
        self.pump();

        match self.mode {
            EditMode::Completion => {
                let sel = self.widget.selection();
                let accepted = self.widget.selected_text();
                let caret = if accepted.ends_with(')') {
                    sel.end() - 1
                } else {
                    sel.end()
                };
                self.widget.set_caret(caret);
                self.mode = EditMode::Insert;
                tracing::debug!("Committed {:?}, caret at {}", accepted, caret);
            }
            EditMode::Insert => {
                self.widget.replace_selection(&self.config.commit_fallback);
            }
        }
    }

    // =========================================================================
    // Deferred task drain
    // =========================================================================

    /// Apply every scheduled task, oldest first. The host loop calls this
    /// once per turn, after notifications return and before new input.
    pub fn pump(&mut self) {
        while let Some(task) = self.queue.pop() {
            self.apply(task);
        }
    }

    fn apply(&mut self, task: EditTask) {
        match task {
            EditTask::InsertCloser { pos, closer } => {
                self.widget.insert(pos, &closer.to_string());
                self.widget.set_caret(pos);
            }
            EditTask::AbsorbCloser { pos } => {
                self.widget.remove(pos..pos + 1);
                self.widget.set_caret(pos);
            }
            EditTask::StageSuggestion { pos, text } => {
                let len = text.chars().count();
                self.widget.insert(pos, &text);
                // Reversed selection: caret stays where the user typed
                self.widget.select(pos + len, pos);
                self.mode = EditMode::Completion;
            }
        }
    }

    // =========================================================================
    // Input drivers
    // =========================================================================
    // Convenience wrappers that play the host widget's part: drain pending
    // work, apply the raw edit, then deliver the notification the way the
    // real widget would.

    /// Type one character at the caret, replacing any selection
    pub fn type_char(&mut self, ch: char) {
        self.pump();
        let sel = self.widget.selection();
        self.widget.replace_selection(&ch.to_string());
        if !sel.is_empty() {
            self.on_range_removed(sel.start(), sel.len());
        }
        self.on_char_inserted(sel.start(), ch);
    }

    /// Type a string one character at a time
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    /// Insert text the way a paste arrives: a single character goes through
    /// classification like any keystroke, anything longer bypasses pairing
    /// and completion entirely. A replaced selection still counts as a
    /// removal.
    pub fn paste(&mut self, text: &str) {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.type_char(ch),
            _ => {
                self.pump();
                let sel = self.widget.selection();
                self.widget.replace_selection(text);
                if !sel.is_empty() {
                    self.on_range_removed(sel.start(), sel.len());
                }
            }
        }
    }

    /// Backspace: remove the selection, or the character before the caret
    pub fn delete_backward(&mut self) {
        self.pump();
        let sel = self.widget.selection();
        let base = if sel.is_empty() {
            let caret = self.widget.caret();
            if caret == 0 {
                return;
            }
            caret - 1..caret
        } else {
            sel.range()
        };
        self.remove_with_widening(base);
    }

    /// Forward delete: remove the selection, or the character after the caret
    pub fn delete_forward(&mut self) {
        self.pump();
        let sel = self.widget.selection();
        let base = if sel.is_empty() {
            let caret = self.widget.caret();
            if caret >= self.widget.len_chars() {
                return;
            }
            caret..caret + 1
        } else {
            sel.range()
        };
        self.remove_with_widening(base);
    }

    fn remove_with_widening(&mut self, base: Range<usize>) {
        let span = self.removal_span(base.start, base.end - base.start);
        let len = span.end - span.start;
        self.widget.remove(span.clone());
        self.widget.set_caret(span.start);
        self.on_range_removed(span.start, len);
    }
}
