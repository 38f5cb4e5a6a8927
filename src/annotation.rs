//! Parsing of the semicolon-delimited annotation column and resolution of the
//! gene symbol and population allele frequency from it.
//!
//! Real-world files spell the same key in several ways (`GENE`/`Gene`/`gene`,
//! `gnomAD_AF`/`GNOMAD_AF_popmax`/`AF`), so both lookups are expressed as a
//! fixed, ordered chain of strategies where the first hit wins.

use log::debug;
use multimap::MultiMap;

use crate::parser::{self, MISSING};
use crate::types::{AnnotationValue, Annotations};

/// Case-variants of the gene key, in priority order.
pub const GENE_KEYS: [&str; 3] = ["GENE", "Gene", "gene"];

const GNOMAD_AF: &str = "GNOMAD_AF";
const AF: &str = "AF";

/// One way of locating the allele frequency candidate in an annotation map.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrequencyLookup {
    /// Key equal to the given (upper-case) name, ignoring case.
    /// If several keys collapse to the same name, the last one wins.
    /// An empty value counts as no match.
    CaseInsensitive(&'static str),
    /// First key, in annotation order, whose upper-cased form contains `GNOMAD_AF`
    /// or is exactly `AF`. Also matches unrelated keys such as `NOT_GNOMAD_AF_X`.
    Scan,
}

/// The order in which frequency lookups are tried.
pub const FREQUENCY_LOOKUPS: [FrequencyLookup; 3] = [
    FrequencyLookup::CaseInsensitive(GNOMAD_AF),
    FrequencyLookup::CaseInsensitive(AF),
    FrequencyLookup::Scan,
];

/// Upper-cased view of the annotation keys.
struct CaseInsensitiveView<'a> {
    keys: MultiMap<String, &'a AnnotationValue>,
}

impl<'a> CaseInsensitiveView<'a> {
    fn new(annotations: &'a Annotations) -> Self {
        let keys = annotations
            .iter()
            .map(|(key, value)| (key.to_uppercase(), value))
            .collect();
        Self { keys }
    }

    fn get(&self, key: &str) -> Option<&'a AnnotationValue> {
        self.keys
            .get_vec(key)
            .and_then(|values| values.last())
            .copied()
    }
}

impl FrequencyLookup {
    fn find<'a>(
        &self,
        annotations: &'a Annotations,
        view: &CaseInsensitiveView<'a>,
    ) -> Option<(&'a str, &'a AnnotationValue)> {
        match self {
            FrequencyLookup::CaseInsensitive(key) => view
                .get(key)
                .filter(|value| value.as_str() != Some(""))
                .map(|value| (*key, value)),
            FrequencyLookup::Scan => annotations
                .iter()
                .find(|(key, _)| {
                    let key = key.to_uppercase();
                    key.contains(GNOMAD_AF) || key == AF
                })
                .map(|(key, value)| (key.as_str(), value)),
        }
    }
}

/// Parses `KEY=VALUE;FLAG;...` into a map. `.` and the empty string yield an empty map.
///
/// Items are trimmed and empty items skipped. A repeated key keeps its first
/// position but takes the later value. This never fails.
pub fn parse_annotations(raw: &str) -> Annotations {
    let mut annotations = Annotations::new();
    if raw == MISSING || raw.is_empty() {
        return annotations;
    }
    for item in raw.split(';').map(str::trim).filter(|item| !item.is_empty()) {
        let (key, value) = match parser::annotation_item(item) {
            Ok((_, (key, Some(value)))) => (key.trim(), AnnotationValue::Value(value.trim().into())),
            Ok((_, (key, None))) => (key, AnnotationValue::Flag),
            Err(_) => (item, AnnotationValue::Flag),
        };
        annotations.insert(key.to_owned(), value);
    }
    annotations
}

/// The first non-empty value among `GENE`, `Gene` and `gene`.
pub fn resolve_gene(annotations: &Annotations) -> Option<String> {
    GENE_KEYS
        .iter()
        .filter_map(|key| annotations.get(*key))
        .filter_map(AnnotationValue::as_str)
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Population allele frequency, following [`FREQUENCY_LOOKUPS`].
///
/// The first lookup that finds a candidate decides. If its value is a flag or does
/// not parse as a float the frequency is unknown; later lookups are not consulted.
pub fn resolve_allele_frequency(annotations: &Annotations) -> Option<f64> {
    let view = CaseInsensitiveView::new(annotations);
    let (key, value) = FREQUENCY_LOOKUPS
        .iter()
        .find_map(|lookup| lookup.find(annotations, &view))?;
    let parsed = value.as_str().and_then(|raw| raw.parse::<f64>().ok());
    if parsed.is_none() {
        debug!("Ignoring unparseable allele frequency {}={:?}", key, value);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn value(v: &str) -> AnnotationValue {
        AnnotationValue::Value(v.into())
    }

    #[rstest]
    #[case(".")]
    #[case("")]
    #[case(";;")]
    #[case(" ; ")]
    fn test_no_annotations(#[case] raw: &str) {
        assert!(parse_annotations(raw).is_empty());
    }

    #[test]
    fn test_parse_annotations() {
        let annotations = parse_annotations(" GENE = BRCA1 ;DB; HGVS=c.68_69del=x ;AF=0.2");
        let parsed: Vec<(&str, &AnnotationValue)> = annotations
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        assert_eq!(
            parsed,
            vec![
                ("GENE", &value("BRCA1")),
                ("DB", &AnnotationValue::Flag),
                ("HGVS", &value("c.68_69del=x")),
                ("AF", &value("0.2")),
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_keep_position() {
        let annotations = parse_annotations("AF=0.1;GENE=TP53;AF=0.3");
        assert_eq!(annotations.get_index(0), Some((&"AF".to_string(), &value("0.3"))));
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let a = parse_annotations("GENE=TP53;AF=0.01");
        let b = parse_annotations("AF=0.01;GENE=TP53");
        assert_eq!(a.get("GENE"), b.get("GENE"));
        assert_eq!(a.get("AF"), b.get("AF"));
    }

    #[rstest]
    #[case("GENE=BRCA1;Gene=BRCA2;gene=TP53", Some("BRCA1"))]
    #[case("gene=TP53;Gene=BRCA2", Some("BRCA2"))]
    #[case("gene=TP53", Some("TP53"))]
    #[case("GENE=;gene=TP53", Some("TP53"))]
    #[case("GENE;gene=TP53", Some("TP53"))]
    #[case("GeNe=TP53", None)]
    #[case("AF=0.1", None)]
    fn test_resolve_gene(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            resolve_gene(&parse_annotations(raw)).as_deref(),
            expected
        );
    }

    #[rstest]
    #[case("GNOMAD_AF=0.001;AF=0.2", Some(0.001))]
    #[case("AF=0.2;GNOMAD_AF=0.001", Some(0.001))]
    #[case("gnomad_af=0.3", Some(0.3))]
    #[case("gnomAD_AF=0.1;GNOMAD_AF=0.2", Some(0.2))]
    #[case("af=1e-5", Some(0.00001))]
    #[case("GNOMAD_AF_POPMAX=0.04;AF_EAS=0.5", Some(0.04))]
    #[case("X_gnomad_af_nfe=0.02;other_gnomAD_AF=0.9", Some(0.02))]
    #[case("GNOMAD_AF=;AF=0.2", Some(0.2))]
    #[case("X_GNOMAD_AF=0.3;GNOMAD_AF=", Some(0.3))]
    #[case("AF_EAS=0.5", None)]
    #[case("GENE=BRCA1", None)]
    #[case(".", None)]
    fn test_resolve_allele_frequency(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(resolve_allele_frequency(&parse_annotations(raw)), expected);
    }

    #[rstest]
    #[case("AF=abc")]
    #[case("GNOMAD_AF=.")]
    #[case("GNOMAD_AF=;AF=")]
    #[case("AF")]
    #[case("GENE=TP53;GNOMAD_AF;AF=0.2")]
    #[case("GNOMAD_AF=bad;GNOMAD_AF_POPMAX=0.1")]
    fn test_unparseable_frequency_is_unknown(#[case] raw: &str) {
        assert_eq!(resolve_allele_frequency(&parse_annotations(raw)), None);
    }

    #[test]
    fn test_lookup_order() {
        assert_eq!(
            FREQUENCY_LOOKUPS,
            [
                FrequencyLookup::CaseInsensitive("GNOMAD_AF"),
                FrequencyLookup::CaseInsensitive("AF"),
                FrequencyLookup::Scan,
            ]
        );
    }
}
