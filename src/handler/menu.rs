//! Folder action menu

/// Actions offered for a selected folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirAction {
    NavigateIn,
    RenameChildren,
    Properties,
    OpenInTerminal,
    OpenInEditor,
    GoBack,
}

const DIR_ACTIONS: [DirAction; 6] = [
    DirAction::NavigateIn,
    DirAction::RenameChildren,
    DirAction::Properties,
    DirAction::OpenInTerminal,
    DirAction::OpenInEditor,
    DirAction::GoBack,
];

impl DirAction {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            DirAction::NavigateIn => "Navigate in",
            DirAction::RenameChildren => "Rename children",
            DirAction::Properties => "Properties",
            DirAction::OpenInTerminal => "Open in terminal",
            DirAction::OpenInEditor => "Open in editor",
            DirAction::GoBack => "Go back",
        }
    }

    /// All actions in menu order
    pub fn iter() -> std::array::IntoIter<DirAction, 6> {
        DIR_ACTIONS.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<_> = DirAction::iter().map(|a| a.label()).collect();
        assert_eq!(labels.first(), Some(&"Navigate in"));
        assert_eq!(labels.last(), Some(&"Go back"));
        assert_eq!(labels.len(), 6);
    }
}
