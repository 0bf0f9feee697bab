//! Domain entities: core data structures

/// A leaf process entry: one named, numbered business process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessItem {
    /// Positive numeric code, unique within its section
    pub id: u32,
    /// Display name, non-empty
    pub name: String,
}

impl ProcessItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A top-level functional area of the finance department.
///
/// Sections are immutable: they are constructed once at startup and never
/// modified. Display order is the order in which they appear in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier, unique across the taxonomy.
    /// Used to address expansion state, so it must not change between renders.
    pub key: String,
    /// Roman-numeral display label, purely cosmetic
    pub ordinal: String,
    /// Display title, non-empty
    pub title: String,
    /// Optional short display tag (e.g. "ZK")
    pub short_label: Option<String>,
    /// Processes in display order, may be empty
    pub items: Vec<ProcessItem>,
}

impl Section {
    pub fn new(
        key: impl Into<String>,
        ordinal: impl Into<String>,
        title: impl Into<String>,
        short_label: Option<&str>,
        items: Vec<ProcessItem>,
    ) -> Self {
        Self {
            key: key.into(),
            ordinal: ordinal.into(),
            title: title.into(),
            short_label: short_label.map(String::from),
            items,
        }
    }
}
