/// Events that mutate the shared layout state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    SetSidebarCollapsed(bool),
    ToggleSidebarCollapsed,
    TogglePin { item_id: String },
    ToggleGroup { item_id: String },
    SetWorkspaceMode(bool),
}
