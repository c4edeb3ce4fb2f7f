//! Colors and layout for favorites output.

use console::Style;

/// Width of the right-aligned id column in recipe rows.
pub const ID_COLUMN_WIDTH: usize = 8;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Caution,
    Failed,
}

impl Status {
    /// Marker printed before the message.
    pub fn marker(self) -> &'static str {
        match self {
            Status::Done => "✓",
            Status::Caution => "!",
            Status::Failed => "✗",
        }
    }
}

/// Styles for recipe rows and status lines.
#[derive(Debug, Clone)]
pub struct ForkfulTheme {
    id: Style,
    name: Style,
    category: Style,
    muted: Style,
    title: Style,
    done: Style,
    caution: Style,
    failed: Style,
}

impl ForkfulTheme {
    pub fn colored() -> Self {
        Self {
            id: Style::new().cyan().dim(),
            name: Style::new().bold(),
            category: Style::new().yellow(),
            muted: Style::new().dim(),
            title: Style::new().red().bold(),
            done: Style::new().green(),
            caution: Style::new().yellow().bold(),
            failed: Style::new().red().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            id: Style::new(),
            name: Style::new(),
            category: Style::new(),
            muted: Style::new(),
            title: Style::new(),
            done: Style::new(),
            caution: Style::new(),
            failed: Style::new(),
        }
    }

    /// Colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// One favorites row: right-aligned id, name, then the category in brackets.
    pub fn recipe_row(&self, id: &str, name: &str, category: Option<&str>) -> String {
        let id = format!("{:>width$}", id, width = ID_COLUMN_WIDTH);
        let mut row = format!("{}  {}", self.id.apply_to(id), self.name.apply_to(name));
        if let Some(category) = category {
            row.push(' ');
            row.push_str(&self.category.apply_to(format!("[{}]", category)).to_string());
        }
        row
    }

    /// A status line. Only the marker is colored.
    pub fn status(&self, status: Status, msg: &str) -> String {
        let style = match status {
            Status::Done => &self.done,
            Status::Caution => &self.caution,
            Status::Failed => &self.failed,
        };
        format!("{} {}", style.apply_to(status.marker()), msg)
    }

    pub fn title(&self, title: &str) -> String {
        self.title.apply_to(format!("♥ {}", title)).to_string()
    }

    pub fn muted(&self, text: &str) -> String {
        self.muted.apply_to(text).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_aligns_id_column() {
        let theme = ForkfulTheme::plain();
        assert_eq!(
            theme.recipe_row("52874", "Beef Stroganoff", Some("Beef")),
            "   52874  Beef Stroganoff [Beef]"
        );
        assert_eq!(theme.recipe_row("1", "Soup", None), "       1  Soup");
    }

    #[test]
    fn long_ids_are_not_truncated() {
        let row = ForkfulTheme::plain().recipe_row("1234567890", "A", None);
        assert_eq!(row, "1234567890  A");
    }

    #[test]
    fn status_lines_carry_markers() {
        let theme = ForkfulTheme::plain();
        assert_eq!(theme.status(Status::Done, "Added 'A'"), "✓ Added 'A'");
        assert_eq!(theme.status(Status::Caution, "already a favorite"), "! already a favorite");
        assert_eq!(theme.status(Status::Failed, "Error: x"), "✗ Error: x");
    }

    #[test]
    fn title_has_heart() {
        assert_eq!(
            ForkfulTheme::plain().title("Your Favorite Recipes"),
            "♥ Your Favorite Recipes"
        );
    }
}
