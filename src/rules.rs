//! ACMG/AMP population-frequency evidence and the classification built on it.
//!
//! Rules are kept in [`RULES`], ordered by precedence. [`classify`] reports the
//! first rule that applies; further rules are a matter of adding table entries.

use itertools::Itertools;

use crate::record::VariantRecord;
use crate::types::{ClinicalSignificance, EvidenceCode};

/// BA1 applies at or above this allele frequency.
pub const BA1_THRESHOLD: f64 = 0.05;
/// PM2 applies strictly below this allele frequency.
pub const PM2_THRESHOLD: f64 = 0.0001;

/// One evidence rule with the classification it implies.
#[derive(Clone, Copy)]
pub struct EvidenceRule {
    pub code: EvidenceCode,
    pub significance: ClinicalSignificance,
    pub applies: fn(&VariantRecord) -> bool,
    pub explain: fn(&VariantRecord) -> String,
}

/// Evaluated in order, first match wins. BA1 must stay ahead of PM2.
pub const RULES: [EvidenceRule; 2] = [
    EvidenceRule {
        code: EvidenceCode::BA1,
        significance: ClinicalSignificance::Benign,
        applies: ba1,
        explain: explain_ba1,
    },
    EvidenceRule {
        code: EvidenceCode::PM2,
        significance: ClinicalSignificance::LikelyPathogenic,
        applies: pm2,
        explain: explain_pm2,
    },
];

/// Outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub significance: ClinicalSignificance,
    /// Codes that justify `significance`, in precedence order.
    pub evidence: Vec<EvidenceCode>,
}

impl Classification {
    pub fn label(&self) -> &str {
        self.significance.as_ref()
    }

    /// Evidence codes joined by `, `, or `None`.
    pub fn evidence_summary(&self) -> String {
        if self.evidence.is_empty() {
            "None".to_owned()
        } else {
            self.evidence.iter().join(", ")
        }
    }
}

impl From<Classification> for (ClinicalSignificance, Vec<EvidenceCode>) {
    fn from(classification: Classification) -> Self {
        (classification.significance, classification.evidence)
    }
}

/// Stand-alone benign: known frequency >= 5%. A missing frequency never triggers it.
pub fn ba1(record: &VariantRecord) -> bool {
    match record.population_allele_frequency() {
        Some(af) => af >= BA1_THRESHOLD,
        None => false,
    }
}

/// Moderate pathogenic: frequency < 0.01%, or absent from population data altogether.
pub fn pm2(record: &VariantRecord) -> bool {
    match record.population_allele_frequency() {
        Some(af) => af < PM2_THRESHOLD,
        None => true,
    }
}

pub fn explain_ba1(record: &VariantRecord) -> String {
    match record.population_allele_frequency() {
        None => format!(
            "BA1 not satisfied: gnomAD AF is missing (threshold >= {}; absence is not evidence of a common variant).",
            BA1_THRESHOLD
        ),
        Some(af) if ba1(record) => format!(
            "BA1: gnomAD AF={} is >= {} (too common to cause a rare Mendelian disorder).",
            af, BA1_THRESHOLD
        ),
        Some(af) => format!(
            "BA1 not satisfied: gnomAD AF={} is < {} (not common enough to be benign on frequency alone).",
            af, BA1_THRESHOLD
        ),
    }
}

pub fn explain_pm2(record: &VariantRecord) -> String {
    match record.population_allele_frequency() {
        None => format!(
            "PM2: gnomAD AF is missing (threshold < {}; possible absence from controls).",
            PM2_THRESHOLD
        ),
        Some(af) if pm2(record) => format!(
            "PM2: gnomAD AF={} is < {} (extremely rare or absent in population databases).",
            af, PM2_THRESHOLD
        ),
        Some(af) => format!(
            "PM2 not satisfied: gnomAD AF={} is >= {} (not extremely rare).",
            af, PM2_THRESHOLD
        ),
    }
}

/// Walks [`RULES`] and stops at the first rule that applies; VUS without evidence otherwise.
pub fn classify(record: &VariantRecord) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.applies)(record))
        .map(|rule| Classification {
            significance: rule.significance,
            evidence: vec![rule.code],
        })
        .unwrap_or_default()
}

/// Explanation of every rule in [`RULES`], in order, whether or not it applied.
pub fn explain(record: &VariantRecord) -> Vec<String> {
    RULES.iter().map(|rule| (rule.explain)(record)).collect()
}
