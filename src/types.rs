use indexmap::IndexMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Annotation keys (case-variants included) and their values, in order of first appearance.
pub type Annotations = IndexMap<String, AnnotationValue>;

/// Value of one item of the semicolon-delimited annotation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// `KEY=VALUE`, value trimmed.
    Value(String),
    /// bare `KEY`
    Flag,
}

impl AnnotationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::Value(v) => Some(v.as_str()),
            AnnotationValue::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, AnnotationValue::Flag)
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum EvidenceCode {
    /// Allele frequency >= 5% in population databases.
    BA1,
    /// Absent from controls, or at extremely low frequency.
    PM2,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString, AsRefStr, EnumIter)]
pub enum ClinicalSignificance {
    #[strum(serialize = "Benign")]
    Benign,
    #[strum(serialize = "Likely pathogenic")]
    LikelyPathogenic,
    /// variant of uncertain significance
    #[strum(serialize = "VUS")]
    UncertainSignificance,
}

impl Default for ClinicalSignificance {
    fn default() -> Self {
        ClinicalSignificance::UncertainSignificance
    }
}
