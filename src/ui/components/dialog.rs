//! Delete confirmation dialog renderer.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DeleteDialog;

/// Widest the dialog box gets, borders included.
const MAX_DIALOG_WIDTH: usize = 56;

/// Renders the dialog box centered over whatever is already drawn.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │               Delete Journal?                │
/// │ Are you sure you want to delete this journal?│
/// │                 "My Birthday"                │
/// │                                              │
/// │      [y] Delete              [n] Cancel      │
/// └──────────────────────────────────────────────┘
/// ```
pub fn render_dialog(dialog: &DeleteDialog, theme: &Theme, rows: usize, cols: usize) {
    const HEIGHT: usize = 7;

    let box_width = cols.min(MAX_DIALOG_WIDTH);
    let inner = box_width.saturating_sub(2);
    let left = cols.saturating_sub(box_width) / 2 + 1;
    let top = rows.saturating_sub(HEIGHT) / 2 + 1;
    let frame = Theme::fg(&theme.colors.dialog_border);

    let lines = [
        (dialog.title.clone(), format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.danger_fg))),
        (dialog.message.clone(), Theme::fg(&theme.colors.text_normal)),
        (format!("\"{}\"", dialog.entry_title), Theme::fg(&theme.colors.title_fg)),
        (String::new(), String::new()),
        ("[y] Delete        [n] Cancel".to_string(), Theme::fg(&theme.colors.text_dim)),
    ];

    position_cursor(top, left);
    print!("{frame}┌{}┐{}", "─".repeat(inner), Theme::reset());

    for (offset, (text, style)) in lines.iter().enumerate() {
        let text = helpers::clip(text, inner);
        let len = helpers::width(&text);
        let pad_left = inner.saturating_sub(len) / 2;

        position_cursor(top + 1 + offset, left);
        print!("{frame}│{}", Theme::reset());
        print!("{}", " ".repeat(pad_left));
        print!("{style}{text}{}", Theme::reset());
        print!("{}", " ".repeat(inner.saturating_sub(pad_left + len)));
        print!("{frame}│{}", Theme::reset());
    }

    position_cursor(top + HEIGHT - 1, left);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}
