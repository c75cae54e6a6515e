use utf8str::Utf8Str;

#[test]
fn test_at_walks_codepoint_indices() {
    let mut s = Utf8Str::from_bytes("εξαίρετος - Greek, \"excellent\"".as_bytes()).unwrap();
    assert_eq!(s.len(), 30);

    assert_eq!(s.at(0), Some(u32::from('ε')));
    assert_eq!(s.at(8), Some(u32::from('ς')));
    assert_eq!(s.at(19), Some(u32::from('"')));
    assert_eq!(s.at(29), Some(u32::from('"')));
    assert_eq!(s.at(30), None);
    assert_eq!(s.at(500), None);

    s.push_char(u32::from('.')).unwrap();
    assert_eq!(s.at(29), Some(u32::from('"')));
    assert_eq!(s.at(30), Some(u32::from('.')));
    assert_eq!(s.at(500), None);
}

#[test]
fn test_at_on_empty() {
    let s = Utf8Str::new();

    assert_eq!(s.at(0), None);
    assert_eq!(s.at(500), None);
}

#[test]
fn test_first() {
    let cases = [
        ("A", 'A'),
        ("€ euros", '€'),
        ("道沖， 而用之或不盈。", '道'),
        ("🙂🙂🙂", '🙂'),
    ];
    for (text, expected) in cases {
        let s = Utf8Str::from_bytes(text.as_bytes()).unwrap();
        assert_eq!(s.first(), Some(u32::from(expected)));
    }

    assert_eq!(Utf8Str::new().first(), None);
}

#[test]
fn test_last() {
    let cases = [
        ("A", 'A'),
        ("€ euros", 's'),
        ("道沖， 而用之或不盈。", '。'),
        ("🙂🙂🙂", '🙂'),
    ];
    for (text, expected) in cases {
        let s = Utf8Str::from_bytes(text.as_bytes()).unwrap();
        assert_eq!(s.last(), Some(u32::from(expected)));
    }

    assert_eq!(Utf8Str::new().last(), None);
}

#[test]
fn test_find_char() {
    let s = Utf8Str::from_bytes("A: x = y ∧ x ≠ 0 → y ≠ 0".as_bytes()).unwrap();

    assert_eq!(s.find_char(u32::from('≠')), Some(13));
    assert_eq!(s.find_char(u32::from('∧')), Some(9));
    assert_eq!(s.find_char(u32::from('A')), Some(0));
    assert_eq!(s.find_char(u32::from('C')), None);
}

#[test]
fn test_find_char_zero_and_empty() {
    let s = Utf8Str::from_bytes(b"abc").unwrap();
    assert_eq!(s.find_char(0), None);

    let empty = Utf8Str::new();
    assert_eq!(empty.find_char(u32::from('a')), None);
}

#[test]
fn test_starts_with() {
    let s = Utf8Str::from_bytes("Parciais fy jac codi baw hud llawn dŵr ger tŷ Mabon.".as_bytes())
        .unwrap();

    let parc = Utf8Str::from_bytes(b"Parc").unwrap();
    assert!(s.starts_with(&parc));
    assert!(!parc.starts_with(&s));

    let arci = Utf8Str::from_bytes(b"arci").unwrap();
    assert!(!s.starts_with(&arci));

    assert!(s.starts_with(&Utf8Str::new()));
    assert!(s.starts_with(&s.clone()));
}

#[test]
fn test_ends_with() {
    let s = Utf8Str::from_bytes("Parciais fy jac codi baw hud llawn dŵr ger tŷ Mabon.".as_bytes())
        .unwrap();

    let mabon = Utf8Str::from_bytes(b"Mabon.").unwrap();
    assert!(s.ends_with(&mabon));
    assert!(!mabon.ends_with(&s));

    let unterminated = Utf8Str::from_bytes(b"Mabon").unwrap();
    assert!(!s.ends_with(&unterminated));

    let multi_byte_tail = Utf8Str::from_bytes("tŷ Mabon.".as_bytes()).unwrap();
    assert!(s.ends_with(&multi_byte_tail));

    assert!(s.ends_with(&Utf8Str::new()));
    assert!(s.ends_with(&s.clone()));
}

#[test]
fn test_affixes_on_empty() {
    let empty = Utf8Str::new();
    let a = Utf8Str::from_bytes(b"a").unwrap();

    assert!(empty.starts_with(&Utf8Str::new()));
    assert!(empty.ends_with(&Utf8Str::new()));
    assert!(!empty.starts_with(&a));
    assert!(!empty.ends_with(&a));
}
