use strum_macros::{Display, EnumIter};

/// Entries of the interactive main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuItem {
    #[strum(to_string = "Create a note")]
    Create,
    #[strum(to_string = "List notes")]
    List,
    #[strum(to_string = "View a note")]
    View,
    #[strum(to_string = "Delete a note")]
    Delete,
    #[strum(to_string = "Exit")]
    Exit,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_menu_labels_in_order() {
        let actual: Vec<String> = MenuItem::iter().map(|item| item.to_string()).collect();
        let expected = vec![
            "Create a note",
            "List notes",
            "View a note",
            "Delete a note",
            "Exit",
        ];
        assert_eq!(actual, expected);
    }
}
