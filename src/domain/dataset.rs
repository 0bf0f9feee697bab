//! The fixed taxonomy dataset and its validation.

use itertools::Itertools;

use crate::domain::entities::{ProcessItem, Section};
use crate::domain::error::DomainError;

/// Immutable, ordered collection of sections.
///
/// Supplied once at startup; the only read operation is `sections()` in
/// display order. There are no write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    sections: Vec<Section>,
}

/// Section and process counts, independent of any view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomySummary {
    pub section_count: usize,
    pub process_count: usize,
}

impl Taxonomy {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Count sections and sum process counts across all sections.
    pub fn summary(&self) -> TaxonomySummary {
        TaxonomySummary {
            section_count: self.sections.len(),
            process_count: self.sections.iter().map(|s| s.items.len()).sum(),
        }
    }

    /// Fail-fast validation of the dataset invariants: unique section keys,
    /// non-empty titles and names, positive process ids.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(key) = self.sections.iter().map(|s| &s.key).duplicates().next() {
            return Err(DomainError::DuplicateSectionKey(key.clone()));
        }
        for section in &self.sections {
            if section.title.trim().is_empty() {
                return Err(DomainError::EmptySectionTitle {
                    key: section.key.clone(),
                });
            }
            for item in &section.items {
                if item.id == 0 {
                    return Err(DomainError::InvalidProcessId {
                        key: section.key.clone(),
                        name: item.name.clone(),
                    });
                }
                if item.name.trim().is_empty() {
                    return Err(DomainError::EmptyProcessName {
                        key: section.key.clone(),
                        id: item.id,
                    });
                }
            }
        }
        Ok(())
    }

    /// The finance department taxonomy: 7 sections, 17 processes.
    pub fn builtin() -> Self {
        let item = ProcessItem::new;
        Self::new(vec![
            Section::new(
                "ops",
                "I",
                "Operational Finance",
                None,
                vec![item(46, "Outgoing payments"), item(52, "Incoming payments")],
            ),
            Section::new(
                "ur",
                "II",
                "Sales & Distribution",
                Some("UR"),
                vec![
                    item(68, "Marketplaces: settlement reconciliation"),
                    item(70, "B2B: counterparty reconciliation"),
                    item(72, "Retail: acquiring and cash-desk reconciliation"),
                    item(74, "Retail: returns processing"),
                    item(76, "Tenders, government and corporate procurement"),
                ],
            ),
            Section::new(
                "warehouse",
                "III",
                "Warehouse & Inventory",
                None,
                vec![
                    item(60, "Goods receipt"),
                    item(62, "Stocktaking"),
                    item(64, "Write-offs / Defects"),
                ],
            ),
            Section::new(
                "mgmt",
                "IV",
                "Management Accounting & Planning",
                None,
                vec![
                    item(48, "Financial planning and unit economics"),
                    item(66, "Management reporting"),
                ],
            ),
            Section::new(
                "tax",
                "V",
                "Tax Reporting & Authorities",
                Some("NR"),
                vec![item(44, "Taxes and filings"), item(54, "Government inquiries")],
            ),
            Section::new(
                "hr",
                "VI",
                "Payroll & Personnel",
                Some("ZK"),
                vec![
                    item(50, "Payroll calculation"),
                    item(56, "Personnel changes"),
                    item(58, "Business travel expenses"),
                ],
            ),
            Section::new("legal", "VII", "Documents, Contracts & Legal", None, vec![]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let summary = Taxonomy::builtin().summary();
        assert_eq!(summary.section_count, 7);
        assert_eq!(summary.process_count, 17);
    }

    #[test]
    fn test_builtin_passes_validation() {
        Taxonomy::builtin().validate().unwrap();
    }
}
