//! Pure layout functions: (section, expanded) → render instructions.
//!
//! No side effects and no terminal dependency, so the conditional-rendering
//! rules are unit-testable without a display surface.

use crate::domain::Section;

/// Direction of the expand/collapse indicator on a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Pointing down: items are visible
    Expanded,
    /// Pointing right: items are hidden
    Collapsed,
}

/// Header row: ordinal, title, optional short tag, optional indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    pub ordinal: String,
    pub title: String,
    pub short_label: Option<String>,
    /// None for empty sections: there is nothing to toggle into view
    pub indicator: Option<Indicator>,
}

/// One rendered process line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
}

/// What appears below a section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Expanded, non-empty: item rows in dataset order
    Items(Vec<ItemRow>),
    /// Empty section: "no processes" note, shown regardless of expansion
    Placeholder,
    /// Collapsed, non-empty: subtree omitted from output entirely
    Hidden,
}

/// Complete render instructions for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub key: String,
    pub header: HeaderRow,
    pub body: SectionBody,
}

/// Compute the layout of one section for a given expansion flag.
pub fn layout_section(section: &Section, expanded: bool) -> SectionLayout {
    let indicator = if section.items.is_empty() {
        None
    } else if expanded {
        Some(Indicator::Expanded)
    } else {
        Some(Indicator::Collapsed)
    };

    let body = if section.items.is_empty() {
        SectionBody::Placeholder
    } else if expanded {
        SectionBody::Items(
            section
                .items
                .iter()
                .map(|item| ItemRow {
                    id: item.id,
                    name: item.name.clone(),
                })
                .collect(),
        )
    } else {
        SectionBody::Hidden
    };

    SectionLayout {
        key: section.key.clone(),
        header: HeaderRow {
            ordinal: section.ordinal.clone(),
            title: section.title.clone(),
            short_label: section.short_label.clone(),
            indicator,
        },
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessItem;

    fn section_with_items() -> Section {
        Section::new(
            "ops",
            "I",
            "Operational Finance",
            None,
            vec![
                ProcessItem::new(46, "Outgoing payments"),
                ProcessItem::new(52, "Incoming payments"),
            ],
        )
    }

    fn empty_section() -> Section {
        Section::new("legal", "VII", "Documents, Contracts & Legal", None, vec![])
    }

    #[test]
    fn test_expanded_section_lists_items_in_order() {
        let layout = layout_section(&section_with_items(), true);
        assert_eq!(layout.header.indicator, Some(Indicator::Expanded));
        match layout.body {
            SectionBody::Items(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].id, 46);
                assert_eq!(rows[1].id, 52);
            }
            other => panic!("expected item rows, got {:?}", other),
        }
    }

    #[test]
    fn test_collapsed_section_omits_subtree() {
        let layout = layout_section(&section_with_items(), false);
        assert_eq!(layout.header.indicator, Some(Indicator::Collapsed));
        assert_eq!(layout.body, SectionBody::Hidden);
    }

    #[test]
    fn test_empty_section_has_no_indicator_and_shows_placeholder() {
        for expanded in [true, false] {
            let layout = layout_section(&empty_section(), expanded);
            assert_eq!(layout.header.indicator, None);
            assert_eq!(layout.body, SectionBody::Placeholder);
        }
    }
}
