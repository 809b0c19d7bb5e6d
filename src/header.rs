//! Page header and navigation tabs

use crate::shell::View;

pub const TITLE: &str = "Equipamentos Arkmeds";

pub fn render(active: View) -> String {
    let tabs = [View::List, View::Create]
        .iter()
        .map(|view| {
            if *view == active {
                format!("[{}]", view.label())
            } else {
                format!(" {} ", view.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!("{}\n{}\n{}", TITLE, "=".repeat(TITLE.chars().count()), tabs)
}
