#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u64 = 4000;

/// Visual flavor of a toast; selects the icon accent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// State for the transient notification toast.
///
/// `sequence` implements timer cancellation without cancellable handles:
/// every `show` bumps it, and a dismissal carrying a stale sequence number
/// is a no-op. Showing a second toast therefore neuters the first toast's
/// pending auto-dismiss.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    pub sequence: u64,
}

impl ToastState {
    /// Show a toast and return the sequence number its dismissal must carry.
    pub fn show(&mut self, message: String, kind: ToastKind) -> u64 {
        self.message = message;
        self.kind = kind;
        self.visible = true;
        self.sequence += 1;
        self.sequence
    }

    /// Hide the toast, unless a newer `show` superseded `sequence`.
    pub fn dismiss(&mut self, sequence: u64) {
        if self.sequence == sequence {
            self.visible = false;
        }
    }
}
