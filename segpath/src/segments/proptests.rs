//! Property-based tests for the segment algorithms.

use super::components::{basename, dirname};
use super::join::{join_many, resolve};
use super::relative::relative;
use super::sequence::PathSegments;
use crate::grammar::PathGrammar;
use proptest::prelude::*;

// Small alphabet so that generated paths often share prefixes
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-c]{1,2}",
        2 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 0..6),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{1,2}", 0..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn drive_root_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("c:"), Just("D:"), Just(r"\\host"), Just(r"\\srv")]
}

fn any_separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\")]
}

// Optional drive or UNC root, then segments behind mixed separators
fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(drive_root_strategy()),
        prop::collection::vec((any_separator_strategy(), segment_strategy()), 0..6),
    )
        .prop_map(|(root, parts)| {
            let mut path = root.unwrap_or_default().to_string();
            for (separator, segment) in parts {
                path.push_str(separator);
                path.push_str(&segment);
            }
            path
        })
}

fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,2}", 0..5)
}

fn two_root_grammars() -> [std::sync::Arc<PathGrammar>; 2] {
    [PathGrammar::windows(), PathGrammar::generic()]
}

fn parse(path: &str) -> Option<PathSegments> {
    PathSegments::parse(path, &PathGrammar::posix()).ok()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing a rendered sequence yields the same sequence
    #[test]
    fn render_parse_round_trip(path in raw_path_strategy()) {
        let grammar = PathGrammar::posix();
        if let Some(segments) = parse(&path) {
            let rendered = segments.render(&grammar, "/");
            prop_assert_eq!(parse(&rendered), Some(segments));
        }
    }

    // Normalization never leaves `.` after index 0 or `..` after an entry
    #[test]
    fn normalized_shape(path in raw_path_strategy()) {
        if let Some(segments) = parse(&path) {
            prop_assert!(segments[1..].iter().all(|s| s != "."));
            let parents = segments.iter().take_while(|s| *s == "..").count();
            prop_assert!(segments[parents.max(1)..].iter().all(|s| s != ".."));
        }
    }

    // Joining a single operand is the identity
    #[test]
    fn join_single_identity(path in raw_path_strategy()) {
        if let Some(segments) = parse(&path) {
            let joined = join_many(&[&segments], true, &PathGrammar::posix()).unwrap();
            prop_assert_eq!(joined, segments);
        }
    }

    // resolve(relative(a, b), a) == b for absolute paths
    #[test]
    fn relative_then_resolve(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let grammar = PathGrammar::posix();
        let (a, b) = (parse(&a).unwrap(), parse(&b).unwrap());
        let rel = relative(&a, &b, &grammar).unwrap().unwrap();
        prop_assert_eq!(resolve(&rel, &a, &grammar).unwrap(), b);
    }

    // join(dirname(p), basename(p)) == p when both exist
    #[test]
    fn dirname_basename_complement(path in raw_path_strategy()) {
        let grammar = PathGrammar::posix();
        if let Some(segments) = parse(&path) {
            if let (Some(parent), Some(name)) =
                (dirname(&segments), basename(&segments, None, &[], &grammar))
            {
                let name = PathSegments::parse(name, &grammar).unwrap();
                prop_assert_eq!(join_many(&[&parent, &name], true, &grammar).unwrap(), segments);
            }
        }
    }

    // Resolving a relative path onto an absolute root yields an absolute path
    #[test]
    fn resolve_is_absolute(root in absolute_path_strategy(), path in relative_path_strategy()) {
        let grammar = PathGrammar::posix();
        let root = parse(&root).unwrap();
        if let Some(path) = parse(&path) {
            if let Ok(resolved) = resolve(&path, &root, &grammar) {
                prop_assert!(grammar.is_root_segment(resolved.start()));
            }
        }
    }

    // Round trip with the grammar's own separator under drive and UNC roots
    #[test]
    fn two_root_grammars_round_trip(path in windows_path_strategy()) {
        for grammar in two_root_grammars() {
            if let Ok(segments) = PathSegments::parse(&path, &grammar) {
                let rendered = segments.render(&grammar, grammar.separator());
                prop_assert_eq!(PathSegments::parse(&rendered, &grammar).unwrap(), segments);
            }
        }
    }

    // Same root: relative then resolve comes back; different roots: unreachable
    #[test]
    fn two_root_grammars_relative_then_resolve(
        root_a in drive_root_strategy(),
        root_b in drive_root_strategy(),
        a in entries_strategy(),
        b in entries_strategy(),
    ) {
        let a = format!("{root_a}\\{}", a.join("\\"));
        let b = format!("{root_b}/{}", b.join("/"));
        for grammar in two_root_grammars() {
            let from = PathSegments::parse(&a, &grammar).unwrap();
            let to = PathSegments::parse(&b, &grammar).unwrap();
            let rel = relative(&from, &to, &grammar).unwrap();
            if root_a == root_b {
                let rel = rel.unwrap();
                prop_assert!(!grammar.is_root_segment(rel.start()));
                prop_assert_eq!(resolve(&rel, &from, &grammar).unwrap(), to);
            } else {
                prop_assert!(rel.is_none());
            }
        }
    }
}
