//! Terminal formatting of section layouts.
//!
//! Presentation only: connectors come from termtree, colors from `colored`
//! (NO_COLOR/CLICOLOR are respected automatically). All conditional-rendering
//! rules live in `layout`; this module just formats what it is given.

use colored::Colorize;
use termtree::Tree;

use crate::view::layout::{Indicator, ItemRow, SectionLayout};
use crate::view::tree_view::TreeView;

/// Expand/collapse indicator glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub expanded: &'static str,
    pub collapsed: &'static str,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            expanded: "▼",
            collapsed: "▶",
        }
    }

    pub fn ascii() -> Self {
        Self {
            expanded: "v",
            collapsed: ">",
        }
    }

    fn for_indicator(&self, indicator: Indicator) -> &'static str {
        match indicator {
            Indicator::Expanded => self.expanded,
            Indicator::Collapsed => self.collapsed,
        }
    }
}

/// Render the whole view as a terminal tree, ending with a newline.
pub fn render(view: &TreeView, glyphs: &Glyphs) -> String {
    render_inner(view, glyphs, None)
}

/// Like `render`, but marks the section at `cursor` for interactive browsing.
pub fn render_with_cursor(view: &TreeView, glyphs: &Glyphs, cursor: usize) -> String {
    render_inner(view, glyphs, Some(cursor))
}

fn render_inner(view: &TreeView, glyphs: &Glyphs, cursor: Option<usize>) -> String {
    let summary = view.summary();
    let counts = format!(
        "{} sections · {} processes",
        summary.section_count, summary.process_count
    );
    let root_label = format!("{}  {}", "Finance Department".bold(), counts.dimmed());

    let leaves = view
        .layouts()
        .iter()
        .enumerate()
        .map(|(idx, layout)| section_tree(layout, glyphs, cursor == Some(idx)))
        .collect::<Vec<_>>();

    Tree::new(root_label).with_leaves(leaves).to_string()
}

fn section_tree(layout: &SectionLayout, glyphs: &Glyphs, selected: bool) -> Tree<String> {
    use crate::view::layout::SectionBody;

    let mut node = Tree::new(header_label(layout, glyphs, selected));
    match &layout.body {
        SectionBody::Items(rows) => {
            node = node.with_leaves(rows.iter().map(|row| Tree::new(item_label(row))));
        }
        SectionBody::Placeholder => {
            node = node.with_leaves([Tree::new(
                "no processes".italic().dimmed().to_string(),
            )]);
        }
        SectionBody::Hidden => {}
    }
    node
}

fn header_label(layout: &SectionLayout, glyphs: &Glyphs, selected: bool) -> String {
    let header = &layout.header;
    let mut label = format!("{} {}", header.ordinal.cyan(), header.title);
    if let Some(short) = &header.short_label {
        label.push_str(&format!(" {}", format!("[{}]", short).dimmed()));
    }
    if let Some(indicator) = header.indicator {
        label.push_str(&format!(" {}", glyphs.for_indicator(indicator).dimmed()));
    }
    if selected {
        format!("{} {}", "›".bold(), label)
    } else {
        label
    }
}

fn item_label(row: &ItemRow) -> String {
    format!("{}  {}", format!("{:>2}", row.id).dimmed(), row.name)
}
