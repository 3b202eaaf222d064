use checklist::ChecklistItem;

/// A row-based visual surface the list controller patches.
///
/// Implementations bind this to real widgets (a list view, a table, a TUI pane). Positions are
/// row indexes in display order. The controller only ever issues the three operations below, in
/// edit-script order, so a surface never needs to diff anything itself.
pub trait RowSurface {
    /// Creates a row at `position`, bound to `item`. Rows at `position` and below shift down.
    fn insert_row(&mut self, position: usize, item: &ChecklistItem);

    /// Removes the row at `position`. Rows below shift up.
    fn remove_row(&mut self, position: usize);

    /// Rebinds the row at `position` with updated content, keeping the row element itself.
    fn update_row(&mut self, position: usize, item: &ChecklistItem);
}

/// The edit dialog's text field.
///
/// The field outlives individual session polls; its content is only read back on explicit
/// confirmation.
pub trait TextInput {
    /// Current field content. `None` when the field is gone or was never set.
    fn text(&self) -> Option<String>;

    fn set_text(&mut self, text: &str);
}
