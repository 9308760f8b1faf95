use super::*;

#[test]
fn open_boundary_allowed() {
    assert!(is_open_boundary(None));
    for c in [' ', '\t', '\n', '\u{a0}', '('] {
        assert!(is_open_boundary(Some(c)), "{:?}", c);
    }
}

#[test]
fn open_boundary_refused() {
    for c in ['a', 'Z', '7', 'é', '$', '.', '[', '{', '\\', ')'] {
        assert!(!is_open_boundary(Some(c)), "{:?}", c);
    }
}

#[test]
fn close_boundary_allowed() {
    assert!(is_close_boundary(None));
    for c in [' ', '\n', ')', '.', ',', ';', ':', '!', '?'] {
        assert!(is_close_boundary(Some(c)), "{:?}", c);
    }
}

#[test]
fn close_boundary_refused() {
    for c in ['a', '0', 'ß', '$', ']', '}', '(', '\\'] {
        assert!(!is_close_boundary(Some(c)), "{:?}", c);
    }
}

#[test]
fn default_rules_match_free_functions() {
    let rules = BoundaryRules::default();
    for c in " \t(.,;:!?)[]{}$a1\\".chars() {
        assert_eq!(rules.is_open_boundary(Some(c)), is_open_boundary(Some(c)));
        assert_eq!(rules.is_close_boundary(Some(c)), is_close_boundary(Some(c)));
    }
}

#[test]
fn custom_rules() {
    let rules = BoundaryRules::new("([", ").]");

    assert!(rules.is_open_boundary(Some('[')));
    assert!(rules.is_close_boundary(Some(']')));
    assert!(!rules.is_open_boundary(Some('{')));
    assert!(!rules.is_close_boundary(Some(',')));
    assert!(rules.is_close_boundary(None));
}

#[test]
fn alphanumerics_cannot_be_allowed() {
    let rules = BoundaryRules::new("a$", "1$");

    assert!(!rules.is_open_boundary(Some('a')));
    assert!(!rules.is_open_boundary(Some('$')));
    assert!(!rules.is_close_boundary(Some('1')));
    assert!(!rules.is_close_boundary(Some('$')));
}

#[test]
fn empty_rules_still_allow_whitespace() {
    let rules = BoundaryRules::new("", "");

    assert!(rules.is_open_boundary(Some(' ')));
    assert!(rules.is_close_boundary(Some('\n')));
    assert!(!rules.is_open_boundary(Some('(')));
    assert!(!rules.is_close_boundary(Some('.')));
}
