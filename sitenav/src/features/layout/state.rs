use std::collections::HashSet;

/// Result of a pin toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinChange {
    Pinned,
    Unpinned,
}

/// Collapse, pin and workspace flags shared by the navigation tree.
///
/// Every operation is total. Registry-aware guarding lives in the layout
/// reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutState {
    sidebar_collapsed: bool,
    pinned_item_ids: HashSet<String>,
    workspace_mode: bool,
    expanded_groups: HashSet<String>,
}

impl LayoutState {
    pub(crate) fn new(sidebar_collapsed: bool) -> Self {
        Self {
            sidebar_collapsed,
            ..Self::default()
        }
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Ids the user pinned on top of the registry defaults.
    pub fn pinned_item_ids(&self) -> &HashSet<String> {
        &self.pinned_item_ids
    }

    pub fn is_pinned(&self, item_id: &str) -> bool {
        self.pinned_item_ids.contains(item_id)
    }

    pub fn is_workspace_mode(&self) -> bool {
        self.workspace_mode
    }

    pub fn is_group_expanded(&self, item_id: &str) -> bool {
        self.expanded_groups.contains(item_id)
    }

    pub fn set_sidebar_collapsed(&mut self, value: bool) {
        self.sidebar_collapsed = value;
    }

    pub fn toggle_sidebar_collapsed(&mut self) {
        self.set_sidebar_collapsed(!self.sidebar_collapsed);
    }

    /// Flip membership of `item_id` in the dynamic pin set.
    pub fn toggle_pin(&mut self, item_id: &str) -> PinChange {
        if self.pinned_item_ids.remove(item_id) {
            PinChange::Unpinned
        } else {
            self.pinned_item_ids.insert(item_id.to_string());
            PinChange::Pinned
        }
    }

    pub fn set_workspace_mode(&mut self, value: bool) {
        self.workspace_mode = value;
    }

    /// Flip whether a group shows its children inline. Returns the new
    /// expansion flag.
    pub fn toggle_group(&mut self, item_id: &str) -> bool {
        if self.expanded_groups.remove(item_id) {
            false
        } else {
            self.expanded_groups.insert(item_id.to_string());
            true
        }
    }

    /// Drop pins failing `keep_pin` and expansions failing `keep_group`.
    pub(crate) fn retain_items<P, G>(
        &mut self,
        keep_pin: P,
        keep_group: G,
    ) -> usize
    where
        P: Fn(&str) -> bool,
        G: Fn(&str) -> bool,
    {
        let before = self.pinned_item_ids.len() + self.expanded_groups.len();
        self.pinned_item_ids.retain(|id| keep_pin(id));
        self.expanded_groups.retain(|id| keep_group(id));
        before - self.pinned_item_ids.len() - self.expanded_groups.len()
    }
}
