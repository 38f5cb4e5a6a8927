use std::fmt;

use getset::{CopyGetters, Getters};

use crate::annotation::{parse_annotations, resolve_allele_frequency, resolve_gene};
use crate::error::{Error, Result};
use crate::parser::DataLine;

/// One variant and the annotations the rules look at. Not modified after construction.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct VariantRecord {
    #[getset(get = "pub")]
    chromosome: String,
    /// 1-based
    #[getset(get_copy = "pub")]
    position: u64,
    #[getset(get = "pub")]
    reference_allele: String,
    #[getset(get = "pub")]
    alternate_allele: String,
    #[getset(get = "pub")]
    gene: Option<String>,
    // not read by any rule yet
    #[getset(get = "pub")]
    consequence: Option<String>,
    /// `None` means unknown, which is not the same as zero.
    #[getset(get_copy = "pub")]
    population_allele_frequency: Option<f64>,
}

impl VariantRecord {
    pub fn new<S: Into<String>>(
        chromosome: S,
        position: u64,
        reference_allele: S,
        alternate_allele: S,
    ) -> Self {
        VariantRecord {
            chromosome: chromosome.into(),
            position,
            reference_allele: reference_allele.into(),
            alternate_allele: alternate_allele.into(),
            gene: None,
            consequence: None,
            population_allele_frequency: None,
        }
    }

    pub fn with_gene<S: Into<String>>(mut self, gene: Option<S>) -> Self {
        self.gene = gene.map(Into::into);
        self
    }

    pub fn with_consequence<S: Into<String>>(mut self, consequence: Option<S>) -> Self {
        self.consequence = consequence.map(Into::into);
        self
    }

    pub fn with_population_allele_frequency(mut self, frequency: Option<f64>) -> Self {
        self.population_allele_frequency = frequency;
        self
    }

    /// Builds a record from the columns of a data line; `line` is only used for error reporting.
    pub(crate) fn from_data_line(data: &DataLine, line: usize) -> Result<Self> {
        let position = data
            .pos
            .parse::<u64>()
            .map_err(|source| Error::InvalidPosition {
                line,
                value: data.pos.to_owned(),
                source,
            })?;
        let annotations = parse_annotations(data.info);
        Ok(
            VariantRecord::new(data.chrom, position, data.ref_allele, data.alt_allele)
                .with_gene(resolve_gene(&annotations))
                .with_population_allele_frequency(resolve_allele_frequency(&annotations)),
        )
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}>{} (gene={}, af=",
            self.chromosome,
            self.position,
            self.reference_allele,
            self.alternate_allele,
            self.gene.as_deref().unwrap_or("."),
        )?;
        match self.population_allele_frequency {
            Some(af) => write!(f, "{})", af),
            None => write!(f, ".)"),
        }
    }
}
