use dynamic_bitset::BitSet;

#[test]
fn test_and_takes_shorter_length() {
    let a: BitSet = "110110111".parse().unwrap();
    let b: BitSet = "0111".parse().unwrap();
    let c = &a & &b;
    assert_eq!(c.len(), 4);
    assert_eq!(c.to_string(), "0101");
    assert_eq!((b.clone() & a.clone()), c);

    let mut d = a.clone();
    d &= &b;
    assert_eq!(d, c);
}

#[test]
fn test_or_xor_take_longer_length() {
    let a: BitSet = "1100".parse().unwrap();
    let b: BitSet = "0101011".parse().unwrap();
    assert_eq!((&a | &b).to_string(), "1101011");
    assert_eq!((&a ^ &b).to_string(), "1001011");

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c.len(), 7);
    c ^= &b;
    assert_eq!(c.to_string(), "1000000");
}

#[test]
fn test_and_across_words() {
    let a = BitSet::filled(100, true);
    let mut b = BitSet::filled(70, false);
    b.set_range(30, 40, true).unwrap();
    let c = &a & &b;
    assert_eq!(c.len(), 70);
    assert_eq!(c.hamming_weight(), 40);
    assert_eq!(c.word_count(), 3);
}

#[test]
fn test_not() {
    let set = BitSet::filled(40, false);
    let inverted = !&set;
    assert_eq!(inverted.hamming_weight(), 40);
    // The operator clears padding, so all() only sees logical bits here.
    assert!(!inverted.all());

    let mut raw = set.clone();
    raw.not_operation();
    assert!(raw.all());
    assert_eq!(raw.hamming_weight(), 40);
    assert_eq!(raw, inverted);
}

#[test]
fn test_shift_operators() {
    let set: BitSet = "1011001110".parse().unwrap();
    assert_eq!((&set << 3).to_string(), "1001110000");
    assert_eq!((&set >> 3).to_string(), "0001011001");
    assert_eq!((&set << 0), set);
    assert_eq!((&set << 10).hamming_weight(), 0);
    assert_eq!((&set >> 11).len(), 10);

    let mut shifted = set.clone();
    shifted <<= 1;
    shifted >>= 1;
    assert_eq!(shifted.to_string(), "0011001110");
}

#[test]
fn test_shift_whole_words() {
    let mut set = BitSet::filled(96, false);
    set.set_bit(true, 95).unwrap();
    set.left_shift(64);
    assert_eq!(set.ones().collect::<Vec<_>>(), [31]);
    set.right_shift(33);
    assert_eq!(set.ones().collect::<Vec<_>>(), [64]);
}

#[test]
fn test_shift_does_not_pull_in_padding() {
    let mut set = BitSet::filled(5, true);
    set.left_shift(2);
    assert_eq!(set.to_string(), "11100");
}

#[test]
fn test_rotations() {
    let set: BitSet = "1100101".parse().unwrap();
    let mut left = set.clone();
    left.rotate_left(2);
    assert_eq!(left.to_string(), "0010111");
    let mut right = set.clone();
    right.rotate_right(2);
    assert_eq!(right.to_string(), "0111001");

    // k is reduced modulo len.
    let mut wrapped = set.clone();
    wrapped.rotate_left(9);
    assert_eq!(wrapped, left);
    wrapped.rotate_right(7);
    assert_eq!(wrapped, left);

    let mut empty = BitSet::new();
    empty.rotate_left(3).rotate_right(5);
    assert!(empty.is_empty());
}

#[test]
fn test_rotations_wrap_multi_word_slices() {
    let bits: Vec<bool> = (0..131).map(|i| i % 3 == 0 || i % 11 == 4).collect();
    let set = BitSet::from_bools(&bits);
    for k in [1, 31, 32, 33, 64, 65, 97, 130] {
        let mut left = set.clone();
        left.rotate_left(k);
        let mut expected = bits.clone();
        expected.rotate_left(k);
        assert_eq!(left.iter().collect::<Vec<_>>(), expected, "left k={k}");

        let mut right = set.clone();
        right.rotate_right(k);
        let mut expected = bits.clone();
        expected.rotate_right(k);
        assert_eq!(right.iter().collect::<Vec<_>>(), expected, "right k={k}");
    }

    // Set padding must not leak into the wrapped bits.
    let mut inverted = BitSet::from_bools(&[true, false, false]);
    inverted.not_operation();
    inverted.rotate_right(1);
    assert_eq!(inverted.to_string(), "101");
}
