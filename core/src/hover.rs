//! Drag hover tracking for a drop target with nested children.
//!
//! Entering a child element fires `leave` on the parent before `enter` on the
//! child, so toggling the highlight on each event flickers. The tracker keeps
//! the net enter/leave depth instead: the highlight is on exactly while the
//! depth is positive.

/// The drag events a drop target listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    /// Map a DOM event type (`"dragenter"`, ...) to its kind.
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragEventKind::Enter),
            "dragover" => Some(DragEventKind::Over),
            "dragleave" => Some(DragEventKind::Leave),
            "drop" => Some(DragEventKind::Drop),
            _ => None,
        }
    }
}

/// Highlight transition the view has to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightChange {
    On,
    Off,
}

/// Counter-based hover state. Invariant: `depth > 0` iff highlighted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragHoverTracker {
    depth: u32,
}

impl DragHoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_highlighted(&self) -> bool {
        self.depth > 0
    }

    pub fn enter(&mut self) -> Option<HighlightChange> {
        self.depth = self.depth.saturating_add(1);
        (self.depth == 1).then_some(HighlightChange::On)
    }

    /// Recovers from a missed `enter`.
    pub fn over(&mut self) -> Option<HighlightChange> {
        if self.depth == 0 {
            self.depth = 1;
            return Some(HighlightChange::On);
        }
        None
    }

    /// Reaching (or staying at) zero always reports `Off`.
    pub fn leave(&mut self) -> Option<HighlightChange> {
        match self.depth {
            0 | 1 => {
                self.depth = 0;
                Some(HighlightChange::Off)
            }
            _ => {
                self.depth -= 1;
                None
            }
        }
    }

    /// Always ends the hover, whatever came before.
    pub fn drop(&mut self) -> HighlightChange {
        self.depth = 0;
        HighlightChange::Off
    }

    pub fn handle(&mut self, kind: DragEventKind) -> Option<HighlightChange> {
        match kind {
            DragEventKind::Enter => self.enter(),
            DragEventKind::Over => self.over(),
            DragEventKind::Leave => self.leave(),
            DragEventKind::Drop => Some(self.drop()),
        }
    }
}
