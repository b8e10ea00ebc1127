/// One terminal input event, pre-classified for the form.
///
/// Frontends map raw key events into this union once; the form matches it
/// once at the top of [`Form::handle_input`](crate::Form::handle_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    /// Abort the session (esc, ctrl+c).
    Cancel,

    /// Move focus, or confirm submission from the submit control.
    Nav(NavKey),

    /// A single-field edit, forwarded to every field.
    Edit(EditOp),
}

/// A navigation key, carrying its direction.
///
/// Whether [`Confirm`](NavKey::Confirm) submits or navigates depends on the
/// current focus, so the form decides that, not the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// up, shift+tab.
    Previous,

    /// down, tab.
    Next,

    /// enter: submits on the submit control, otherwise moves forward.
    Confirm,
}

/// One edit applied to a text field's value or cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert a character at the cursor.
    Insert(char),

    /// Remove the character before the cursor.
    Backspace,

    /// Remove the character under the cursor.
    Delete,

    CursorLeft,
    CursorRight,

    /// Jump to the start of the value.
    CursorStart,

    /// Jump past the end of the value.
    CursorEnd,
}
