use crate::tokens::{Segment, TaggedSpan};

/// Split the source into tagged and plain segments using the given spans.
///
/// Joining the text of every segment gives back the source. Spans are
/// expected in the order a tagging pass returns them, any span that is out
/// of order, overlapping or out of bounds is skipped.
pub fn segments<'a>(source: &'a str, spans: &[TaggedSpan]) -> Vec<Segment<'a>> {
    let mut result = vec![];
    let mut at = 0;
    for span in spans {
        if span.start < at || span.is_empty() || source.get(span.range()).is_none() {
            continue;
        }
        if span.start > at {
            result.push(Segment::Plain(&source[at..span.start]));
        }
        result.push(Segment::Tagged(span.text(source), span.category));
        at = span.end;
    }
    if at < source.len() {
        result.push(Segment::Plain(&source[at..]));
    }
    result
}
