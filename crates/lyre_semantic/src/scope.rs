//! Nested lexical scope tracking with usage counts.
//!
//! A [`ScopeStack`] is an ordered stack of active [`Frame`]s plus the
//! binding maps of frames that have already been popped. Every operation is
//! a pure transformation: it consumes the stack and returns the updated
//! value, which lets the usage analysis thread the stack through the tree
//! inspector as a plain accumulator with no hidden state.
//!
//! A frame can temporarily *mask* a name: a masked name is invisible to the
//! usage lookup in that frame, which keeps a function's self-recursive
//! references from counting as genuine use.

use compact_str::CompactString;
use lyre_syntax::ast::Range;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Why a name was bound. Diagnostic metadata only; the analysis treats all
/// kinds the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    /// Module-level value, function, or constructor
    TopLevel,
    /// Function or value bound by a `let` block
    Defined,
    /// Bound by a destructuring, case, or argument pattern
    Pattern,
    /// Type alias or custom type name
    Type,
}

/// One binding's bookkeeping within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeEntry {
    /// How many references resolved to this binding so far
    pub uses: u32,
    pub kind: VariableKind,
    /// Where the name was bound
    pub range: Range,
}

/// Binding map of one frame, keyed by name
pub type Bindings = FxHashMap<CompactString, ScopeEntry>;

/// One lexical scope: its bindings plus the names currently masked in it
#[derive(Debug, Clone, Default)]
pub struct Frame {
    masked: FxHashSet<CompactString>,
    bindings: Bindings,
}

/// A never-referenced binding, as reported to the diagnostic layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedBinding {
    pub name: CompactString,
    pub kind: VariableKind,
    pub range: Range,
}

/// The nested-scope accumulator threaded through a file's traversal
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    /// Active frames; the innermost frame is the last element
    active: Vec<Frame>,
    /// Binding maps of popped frames, kept for unused reporting.
    /// Empty frames are discarded instead of retained.
    popped: Vec<Bindings>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost frame holding `bindings`, each starting at zero
    /// uses. Duplicate names within the batch overwrite (last write wins).
    pub fn push(
        mut self,
        bindings: impl IntoIterator<Item = (CompactString, VariableKind, Range)>,
    ) -> Self {
        let mut frame = Frame::default();
        for (name, kind, range) in bindings {
            frame.bindings.insert(
                name,
                ScopeEntry {
                    uses: 0,
                    kind,
                    range,
                },
            );
        }
        self.active.push(frame);
        self
    }

    /// Close the innermost frame. Its bindings move to the popped
    /// collection unless the frame is empty; its mask is discarded.
    pub fn pop(mut self) -> Self {
        if let Some(frame) = self.active.pop() {
            if !frame.bindings.is_empty() {
                self.popped.push(frame.bindings);
            }
        }
        self
    }

    /// Hide `name` from usage lookup in the innermost frame.
    /// No-op when no frame is active.
    pub fn mask(mut self, name: &str) -> Self {
        if let Some(frame) = self.active.last_mut() {
            frame.masked.insert(CompactString::from(name));
        }
        self
    }

    /// Undo [`mask`](Self::mask) for `name` in the innermost frame
    pub fn unmask(mut self, name: &str) -> Self {
        if let Some(frame) = self.active.last_mut() {
            frame.masked.remove(name);
        }
        self
    }

    /// Record one reference to `name`.
    ///
    /// The lookup walks active frames innermost-first. A frame that masks
    /// the name is skipped entirely (its own binding stays untouched) and
    /// the search continues outward, so a masked self-reference can still
    /// flag a same-named outer binding. The first unmasked frame owning the
    /// name takes the count and ends the search. Names no frame owns are
    /// imports or primitives and are silently ignored.
    pub fn flag(mut self, name: &str) -> Self {
        for frame in self.active.iter_mut().rev() {
            if frame.masked.contains(name) {
                continue;
            }
            if let Some(entry) = frame.bindings.get_mut(name) {
                entry.uses += 1;
                break;
            }
        }
        self
    }

    /// Number of active frames
    pub fn depth(&self) -> usize {
        self.active.len()
    }

    /// Whether the outermost active frame binds `name`
    pub fn declared_at_top_level(&self, name: &str) -> bool {
        self.active
            .first()
            .is_some_and(|frame| frame.bindings.contains_key(name))
    }

    /// Never-referenced bindings across all popped frames,
    /// ordered by binding range then name
    pub fn unused_in_popped_frames(&self) -> Vec<UnusedBinding> {
        let mut unused: Vec<UnusedBinding> = self
            .popped
            .iter()
            .flat_map(|bindings| bindings.iter())
            .filter(|(_, entry)| entry.uses == 0)
            .map(|(name, entry)| UnusedBinding {
                name: name.clone(),
                kind: entry.kind,
                range: entry.range,
            })
            .collect();
        sort_unused(&mut unused);
        unused
    }

    /// Never-referenced bindings in the outermost still-active frame,
    /// ordered by binding range then name. The module-level frame is never
    /// popped, so the projection reads it in place.
    pub fn unused_in_top_frame(&self) -> Vec<UnusedBinding> {
        let mut unused: Vec<UnusedBinding> = self
            .active
            .first()
            .into_iter()
            .flat_map(|frame| frame.bindings.iter())
            .filter(|(_, entry)| entry.uses == 0)
            .map(|(name, entry)| UnusedBinding {
                name: name.clone(),
                kind: entry.kind,
                range: entry.range,
            })
            .collect();
        sort_unused(&mut unused);
        unused
    }
}

/// Frames are hash maps; sort so reported diagnostics are deterministic
fn sort_unused(unused: &mut [UnusedBinding]) {
    unused.sort_by(|a, b| a.range.cmp(&b.range).then_with(|| a.name.cmp(&b.name)));
}
