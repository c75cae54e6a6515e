use utf8str::Utf8Str;

#[test]
fn test_forward_iteration() {
    let s = Utf8Str::from_bytes("東京".as_bytes()).unwrap();
    let mut iter = s.iter();

    assert!(iter.has_next());
    assert_eq!(iter.next_char(), Some(Ok(u32::from('東'))));
    assert_eq!(iter.next_char(), Some(Ok(u32::from('京'))));
    assert!(!iter.has_next());
    assert_eq!(iter.next_char(), None);
    assert_eq!(iter.next_char(), None);
}

#[test]
fn test_forward_collect() {
    let s = Utf8Str::from_bytes("東京".as_bytes()).unwrap();

    let chars: Vec<u32> = s.iter().map(|c| c.unwrap()).collect();
    assert_eq!(chars, [u32::from('東'), u32::from('京')]);
}

#[test]
fn test_empty_string_iteration() {
    let s = Utf8Str::new();
    let mut iter = s.iter();

    assert!(!iter.has_next());
    assert!(!iter.has_prev());
    assert_eq!(iter.next_char(), None);
    assert_eq!(iter.prev_char(), None);
}

#[test]
fn test_interleaved_directions() {
    let s = Utf8Str::from_bytes("東京".as_bytes()).unwrap();
    let mut iter = s.iter();

    assert_eq!(iter.next_char(), Some(Ok(u32::from('東'))));
    assert_eq!(iter.next_char(), Some(Ok(u32::from('京'))));
    assert_eq!(iter.prev_char(), Some(Ok(u32::from('京'))));
    assert_eq!(iter.prev_char(), Some(Ok(u32::from('東'))));
    assert!(!iter.has_prev());
    assert_eq!(iter.prev_char(), None);

    assert_eq!(iter.next_char(), Some(Ok(u32::from('東'))));
    assert_eq!(iter.prev_char(), Some(Ok(u32::from('東'))));
}

#[test]
fn test_iterator_size_hint() {
    let s = Utf8Str::from_bytes("東京".as_bytes()).unwrap();
    let mut iter = s.iter();

    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.len(), 2);

    iter.next();
    assert_eq!(iter.size_hint(), (1, Some(1)));

    iter.next();
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_into_iterator_for_loop() {
    let s = Utf8Str::from_bytes("µnit testing".as_bytes()).unwrap();

    let mut count = 0;
    for c in &s {
        c.unwrap();
        count += 1;
    }
    assert_eq!(count, 12);
}

#[test]
fn test_iterator_clone_is_independent() {
    let s = Utf8Str::from_bytes(b"abc").unwrap();
    let mut iter = s.iter();

    assert_eq!(iter.next_char(), Some(Ok(u32::from('a'))));

    let mut snapshot = iter.clone();
    assert_eq!(iter.next_char(), Some(Ok(u32::from('b'))));
    assert_eq!(snapshot.next_char(), Some(Ok(u32::from('b'))));
    assert_eq!(snapshot.next_char(), Some(Ok(u32::from('c'))));
    assert_eq!(iter.next_char(), Some(Ok(u32::from('c'))));
}

#[test]
fn test_multiple_readers_on_one_string() {
    let s = Utf8Str::from_bytes("东西".as_bytes()).unwrap();

    let mut a = s.iter();
    let mut b = s.iter();
    assert_eq!(a.next_char(), Some(Ok(u32::from('东'))));
    assert_eq!(b.next_char(), Some(Ok(u32::from('东'))));
    assert_eq!(a.next_char(), Some(Ok(u32::from('西'))));
    assert_eq!(b.next_char(), Some(Ok(u32::from('西'))));
}
