use dynamic_bitset::{BitSet, Error, ErrorKind};

#[test]
fn test_insert_positions() {
    let mut set: BitSet = "111".parse().unwrap();
    set.insert(false, 0).unwrap();
    assert_eq!(set.to_string(), "0111");
    set.insert(false, 2).unwrap();
    assert_eq!(set.to_string(), "01011");
    set.insert(true, 5).unwrap();
    assert_eq!(set.to_string(), "010111");
}

#[test]
fn test_insert_guards() {
    let mut set: BitSet = "10".parse().unwrap();
    let err = set.insert(true, 3).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 3, len: 2 });

    let err = set.insert(false, 2).unwrap_err();
    assert_eq!(err, Error::LeadingZeroAtMsb { index: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(set.to_string(), "10");

    // An empty set only accepts a one.
    let mut empty = BitSet::new();
    assert!(empty.insert(false, 0).is_err());
    empty.insert(true, 0).unwrap();
    assert_eq!(empty.to_string(), "1");
}

#[test]
fn test_erase_positions() {
    let mut set: BitSet = "011010".parse().unwrap();
    set.erase(5).unwrap();
    assert_eq!(set.to_string(), "01101");
    set.erase(0).unwrap();
    assert_eq!(set.to_string(), "1101");
    set.erase(2).unwrap();
    assert_eq!(set.to_string(), "111");
    assert!(set.erase(3).is_err());
}

#[test]
fn test_erase_single_bit_set() {
    let mut set: BitSet = "1".parse().unwrap();
    set.erase(0).unwrap();
    assert!(set.is_empty());

    let mut set: BitSet = "0".parse().unwrap();
    set.erase(0).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_erase_sole_lsb() {
    let mut set: BitSet = "1000".parse().unwrap();
    let err = set.erase(0).unwrap_err();
    assert_eq!(err, Error::SoleLsbErase);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    // Erasing elsewhere is fine, and so is bit 0 once another bit is set.
    set.erase(3).unwrap();
    set.set_bit(true, 2).unwrap();
    set.erase(0).unwrap();
    assert_eq!(set.to_string(), "01");
}

#[test]
fn test_reverse_positions() {
    let mut set: BitSet = "1001".parse().unwrap();
    set.reverse_insert(true, 0).unwrap();
    assert_eq!(set.to_string(), "10011");
    set.reverse_insert(true, 5).unwrap();
    assert_eq!(set.to_string(), "110011");
    set.reverse_erase(0).unwrap();
    assert_eq!(set.to_string(), "11001");
    set.reverse_erase(2).unwrap();
    assert_eq!(set.to_string(), "1101");

    assert!(set.reverse_insert(true, 5).is_err());
    assert!(set.reverse_erase(4).is_err());
    assert_eq!(
        set.reverse_insert(false, 0).unwrap_err(),
        Error::LeadingZeroAtMsb { index: 4 }
    );
}

#[test]
fn test_push_pop_both_ends() {
    let mut set = BitSet::new();
    for i in 0..70 {
        set.push_back(i % 2 == 0);
    }
    set.push_front(true);
    assert_eq!(set.len(), 71);
    assert_eq!(set.word_count(), 3);
    assert!(set[0]);
    assert!(set[1]);
    assert!(!set[2]);

    assert_eq!(set.pop_front(), Some(true));
    assert_eq!(set.pop_back(), Some(false));
    assert_eq!(set.len(), 69);
    assert_eq!(set.word_count(), 3);
    assert_eq!(set.pop_back(), Some(true));
    set.resize(64, false);
    assert_eq!(set.word_count(), 2);

    let mut drained = Vec::new();
    while let Some(bit) = set.pop_front() {
        drained.push(bit);
    }
    assert_eq!(drained.len(), 64);
    assert!(set.is_empty());
    assert_eq!(set.pop_back(), None);
}

#[test]
fn test_push_back_zero_is_unguarded() {
    let mut set = BitSet::new();
    set.push_back(false);
    set.push_back(false);
    assert_eq!(set.to_string(), "00");
}
