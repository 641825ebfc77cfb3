/// Nested entry rendered under a [`NavItemKind::Group`] item.
///
/// Children are always plain links: they carry no kind of their own, which
/// keeps the tree one level deep and keeps the dropdown out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavChild {
    id: String,
    title: String,
    path: String,
    icon: String,
    badge: Option<String>,
}

impl NavChild {
    /// Create a child link with an empty icon and no badge.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            icon: String::new(),
            badge: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }
}

/// What a top-level navigation entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItemKind {
    /// Direct link to a route.
    Leaf { path: String },
    /// Expandable group of child links.
    Group { children: Vec<NavChild> },
    /// The "more" entry listing items that are currently hidden.
    Dropdown,
}

/// Top-level sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    id: String,
    title: String,
    icon: String,
    badge: Option<String>,
    pinned: bool,
    pinnable: bool,
    kind: NavItemKind,
}

impl NavItem {
    fn with_kind(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: NavItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            badge: None,
            pinned: false,
            pinnable: true,
            kind,
        }
    }

    /// Create a link entry pointing at `path`.
    pub fn leaf(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::with_kind(id, title, NavItemKind::Leaf { path: path.into() })
    }

    /// Create a group entry with nested child links.
    pub fn group(
        id: impl Into<String>,
        title: impl Into<String>,
        children: Vec<NavChild>,
    ) -> Self {
        Self::with_kind(id, title, NavItemKind::Group { children })
    }

    /// Create the "more" entry.
    pub fn dropdown(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_kind(id, title, NavItemKind::Dropdown)
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the registry-authored default visibility.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Set whether the user may toggle this entry's visibility.
    pub fn pinnable(mut self, pinnable: bool) -> Self {
        self.pinnable = pinnable;
        self
    }

    /// Shorthand for an entry that is always shown and cannot be unpinned.
    pub fn locked(self) -> Self {
        self.pinned(true).pinnable(false)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    /// Static visibility set when the registry was authored.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_pinnable(&self) -> bool {
        self.pinnable
    }

    pub fn kind(&self) -> &NavItemKind {
        &self.kind
    }

    /// Route target, present for leaf entries only.
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            NavItemKind::Leaf { path } => Some(path),
            NavItemKind::Group { .. } | NavItemKind::Dropdown => None,
        }
    }

    /// Nested links; empty for anything but groups.
    pub fn children(&self) -> &[NavChild] {
        match &self.kind {
            NavItemKind::Group { children } => children,
            NavItemKind::Leaf { .. } | NavItemKind::Dropdown => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NavItemKind::Group { .. })
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.kind, NavItemKind::Dropdown)
    }

    /// Whether a pin toggle from the user is meaningful for this entry.
    ///
    /// The dropdown is always rendered, so pinning it is rejected just like
    /// an entry authored with `pinnable == false`.
    pub fn is_user_pinnable(&self) -> bool {
        self.pinnable && !self.is_dropdown()
    }
}
