use itertools::Itertools;
use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::{map, rest};
use nom::sequence::separated_pair;
use nom::IResult;

/// Number of mandatory whitespace-separated columns of a data line.
pub(crate) const MANDATORY_FIELDS: usize = 8;

/// Placeholder for an empty annotation column.
pub(crate) const MISSING: &str = ".";

/// The columns of a data line that end up in a record; ID, QUAL and FILTER are dropped.
#[derive(Debug, PartialEq)]
pub(crate) struct DataLine<'a> {
    pub(crate) chrom: &'a str,
    pub(crate) pos: &'a str,
    pub(crate) ref_allele: &'a str,
    pub(crate) alt_allele: &'a str,
    pub(crate) info: &'a str,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    TooFewFields(usize),
    Data(DataLine<'a>),
}

pub(crate) fn line(input: &str) -> Line<'_> {
    let input = input.trim();
    if input.is_empty() {
        return Line::Blank;
    }
    if input.starts_with('#') {
        return Line::Comment;
    }
    let fields = input.split_whitespace().take(MANDATORY_FIELDS).collect_vec();
    if fields.len() < MANDATORY_FIELDS {
        return Line::TooFewFields(fields.len());
    }
    // columns past the eighth (FORMAT, samples) are ignored
    Line::Data(DataLine {
        chrom: fields[0],
        pos: fields[1],
        ref_allele: fields[3],
        alt_allele: fields[4],
        info: fields[7],
    })
}

/// `KEY=VALUE` splits on the first `=` only; anything else is a flag.
pub(crate) fn annotation_item(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    alt((
        map(
            separated_pair(take_till(|c| c == '='), char('='), rest),
            |(key, value)| (key, Some(value)),
        ),
        map(rest, |key| (key, None)),
    ))(input)
}
