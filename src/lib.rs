pub mod annotation;
pub mod error;
pub(crate) mod parser;
pub mod reader;
pub mod record;
pub mod rules;
pub mod types;

pub use annotation::{parse_annotations, resolve_allele_frequency, resolve_gene};
pub use error::{Error, Result};
pub use reader::{parse_records, read_records, VariantRecords};
pub use record::VariantRecord;
pub use rules::{classify, explain, explain_ba1, explain_pm2, Classification};
pub use types::{AnnotationValue, Annotations, ClinicalSignificance, EvidenceCode};
