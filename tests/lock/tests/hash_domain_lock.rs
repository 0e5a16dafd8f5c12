//! Hash domain lock tests.
//!
//! Proves:
//! 1. All domain byte strings are unique
//! 2. All domains are null-terminated
//! 3. All domains follow the `WAYPOINT::*::V1\0` naming convention

use std::collections::BTreeSet;

use waypoint_harness::report_dir::DOMAIN_RUN_REPORT;
use waypoint_search::trace::DOMAIN_SEARCH_TRACE;

const ALL: [&[u8]; 2] = [DOMAIN_SEARCH_TRACE, DOMAIN_RUN_REPORT];

#[test]
fn domains_are_unique() {
    let unique: BTreeSet<&[u8]> = ALL.into_iter().collect();
    assert_eq!(unique.len(), ALL.len());
}

#[test]
fn domains_are_null_terminated() {
    for domain in ALL {
        assert!(
            domain.ends_with(&[0]),
            "{} is not null-terminated",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn domains_follow_naming_convention() {
    for domain in ALL {
        let text = std::str::from_utf8(&domain[..domain.len() - 1]).unwrap();
        assert!(text.starts_with("WAYPOINT::"), "{text}");
        assert!(text.ends_with("::V1"), "{text}");
        assert!(text.is_ascii());
    }
}
