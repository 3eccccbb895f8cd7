use brushwork::languages::haskell;
use brushwork::{RuleSet, TaggedSpan};
use proptest::prelude::*;

fn fragments() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("case"),
            Just("casePath"),
            Just("of"),
            Just("Int"),
            Just("True"),
            Just("x"),
            Just("--"),
            Just("'"),
            Just("\\"),
            Just(" "),
            Just("\n"),
            Just("\r\n"),
            Just("你"),
        ],
        0..48,
    )
    .prop_map(|parts| parts.concat())
}

fn rule_index(rules: &RuleSet, span: &TaggedSpan) -> usize {
    // Every rule of the haskell brush has its own category
    rules
        .rules()
        .iter()
        .position(|r| r.category() == span.category)
        .unwrap_or(usize::MAX)
}

fn check(rules: &RuleSet, source: &str) -> Result<(), TestCaseError> {
    let spans = rules.tag(source);
    prop_assert_eq!(&spans, &rules.tag(source));
    for span in &spans {
        prop_assert!(span.start < span.end);
        prop_assert!(span.end <= source.len());
        prop_assert!(source.is_char_boundary(span.start) && source.is_char_boundary(span.end));
    }
    for pair in spans.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
    }
    // A rejected candidate always loses to a span from an earlier rule
    for (index, rule) in rules.rules().iter().enumerate() {
        for candidate in rule.find_all(source) {
            if spans.contains(&candidate) {
                continue;
            }
            let beaten = spans
                .iter()
                .filter(|s| s.overlaps(&candidate))
                .any(|s| rule_index(rules, s) < index);
            prop_assert!(beaten, "{:?} was dropped without an earlier conflict", candidate);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn haskell_fragments(source in fragments()) {
        let rules = haskell().rule_set().unwrap();
        check(&rules, &source)?;
    }

    #[test]
    fn arbitrary_text(source in any::<String>()) {
        let rules = haskell().rule_set().unwrap();
        check(&rules, &source)?;
    }

    #[test]
    fn batch_matches_single(docs in proptest::collection::vec(fragments(), 0..8)) {
        let rules = haskell().rule_set().unwrap();
        let single: Vec<_> = docs.iter().map(|d| rules.tag(d)).collect();
        prop_assert_eq!(rules.tag_all(&docs), single);
    }
}
