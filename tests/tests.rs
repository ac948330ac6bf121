// SPDX-License-Identifier: MPL-2.0

use intseq::{ErrorKind, NonNegativeSequence, NonNegativeSequenceFactory, Sequence};

const FACTORY: NonNegativeSequenceFactory = NonNegativeSequenceFactory::new();

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seq(pairs: &[(i64, i64)]) -> NonNegativeSequence {
    FACTORY.from_pairs(pairs.iter().copied()).unwrap()
}

fn notation(text: &str) -> NonNegativeSequence {
    FACTORY.parse(text).unwrap()
}

#[test]
fn contains_sequence() {
    let s1 = seq(&[(1, 10), (20, 22), (25, 27)]);
    let s2 = seq(&[(2, 3), (5, 6), (21, 22), (24, 27)]);
    let s3 = seq(&[(21, 21), (26, 27)]);
    let s4 = seq(&[(1, 10), (21, 21), (26, 27)]);
    let s5 = seq(&[(1, 10), (21, 21), (26, 40)]);

    for s in [&s1, &s2, &s3, &s4, &s5] {
        assert!(s.contains_sequence(s), "{s} should contain itself");
    }

    assert!(!s1.contains_sequence(&s2));
    assert!(!s2.contains_sequence(&s1));
    assert!(s1.contains_sequence(&s3));
    assert!(s1.contains_sequence(&s4));
    assert!(!s1.contains_sequence(&s5));
    assert!(s4.contains_sequence(&s3));
    assert!(s5.contains_sequence(&s3));
    assert!(!s4.contains_sequence(&s5));
    assert!(s5.contains_sequence(&s4));
    assert!(s4.subset_of(&s5));

    // The subset has several intervals within a single interval of the superset.
    assert!(seq(&[(0, 4)]).contains_sequence(&seq(&[(0, 2), (4, 4)])));
    assert!(seq(&[(0, 4)]).contains_sequence(&NonNegativeSequence::empty()));
    assert!(!NonNegativeSequence::empty().contains_sequence(&seq(&[(0, 4)])));
}

#[test]
fn contains_value() {
    let s = notation("4-17,19-25,27,29-33,35");
    for value in [4, 5, 9, 15, 16, 17, 19, 27, 29, 30, 33, 35] {
        assert!(s.contains(value), "{s} should contain {value}");
    }
    for value in [1, 18, 26, 28, 34, 40] {
        assert!(!s.contains(value), "{s} should not contain {value}");
    }
}

#[test]
fn intersect() {
    init_log();
    let s1 = seq(&[(1, 10), (20, 22), (25, 27)]);
    let s2 = seq(&[(2, 3), (5, 6), (21, 22), (24, 27)]);
    let s3 = seq(&[(21, 21), (26, 27)]);
    let s4 = seq(&[(5, 9), (19, 29)]);
    let s5 = seq(&[(11, 19), (23, 23), (35, 40)]);
    let s6 = seq(&[(1, 40)]);

    let s12 = s1.intersect(&s2);
    assert_eq!(s12.to_string(), "2-3,5-6,21-22,25-27");
    assert_eq!(s2.intersect(&s1), s12);
    assert_eq!(s1.intersect(&s3), s3);
    assert_eq!(s1.intersect(&s6), s1);

    let s23 = s2.intersect(&s3);
    for value in [21, 26, 27] {
        assert!(s23.contains(value), "{s23} should contain {value}");
    }
    for value in [3, 5, 22, 25, 30] {
        assert!(!s23.contains(value), "{s23} should not contain {value}");
    }

    assert_eq!(s2.intersect(&s4).to_string(), "5-6,21-22,24-27");
    assert!(s1.intersect(&s5).is_empty());
    assert!(s1.is_disjoint(&s5));
    assert!(s1.overlaps(&s2));
}

#[test]
fn intersect_long_sequences() {
    let l1 = notation("0,3,5,12,14-15,18-21,23,25,27,29-31,34-46,49,52-57,59,61,63-72,75,82-89,91-96,98-100,102-113,115-121,123-124,126-133,135-136,138,142-148,150-151,153,156-160,162,164,170-173,175-176,180,182-184,186,189-190,194-195,197");
    let l2 = notation("0-1,3-4,12,14-15,17-21,23,25,27,29-32,34-37,39,42-43,45-46,49,52-59,61,63-72,75,82-89,91-96,98-100,102-124,126-133,135-142,144-153,155,157,160,162,165-166,170-173,175-176,180-181,183,186,189-190,193-195,204");

    let intersect = l1.intersect(&l2);
    assert!(intersect.contains(195));
    assert!(l1.contains_sequence(&intersect));
    assert!(l2.contains_sequence(&intersect));
    for value in 0..=204 {
        assert_eq!(
            intersect.contains(value),
            l1.contains(value) && l2.contains(value),
            "membership of {value}"
        );
    }
}

#[test]
fn union() {
    init_log();
    let s = seq(&[(0, 4), (6, 7), (9, 9)])
        .union(&FACTORY.singleton(10).unwrap())
        .union(&FACTORY.singleton(12).unwrap());
    for value in [0, 1, 2, 3, 4, 6, 7, 9, 10, 12] {
        assert!(s.contains(value), "{s} should contain {value}");
    }
    for value in [5, 8, 11, 13] {
        assert!(!s.contains(value), "{s} should not contain {value}");
    }

    let s1 = seq(&[(1, 5), (7, 25)]);
    let s2 = seq(&[(1, 2), (4, 7), (9, 15)]);
    for union in [s1.union(&s2), s2.union(&s1)] {
        assert_eq!(union, seq(&[(1, 25)]));
        assert!(!union.contains(26));
    }

    let empty = NonNegativeSequence::empty();
    assert!(s1.union(&empty).equals(&s1));
    assert!(empty.union(&s1).equals(&s1));
}

#[test]
fn union_with_bridging_interval() {
    let l1 = notation("188,468,472,474");
    let l2 = notation("468-473");
    assert_eq!(l1.union(&l2).interval_count(), 2);

    let l3 = notation("188,468,472,475");
    assert_eq!(l2.union(&l3).interval_count(), 3);

    let li1 = notation("16,30,38,40-41,51,53,56,72-79,88,92,96,99,107-125,128,132,134-135,144-148,158,164-167,170,174,177,180,184,191,193-195,210-216,218-219,221,223,226,229-232,237,241,244,253,261-262,265,271-272,279,286-291,300-308,311,315,322-323,334,338-340,344,351,353,363,365-366,373,377,380,382,390,392-393,418,420,424-428,430,460,466-470,474,477-487,500,502,510-511,516-522,525,529,536-537,539-541,543-546,554-555,562,567-568,572,574-585,595,604");
    let li2 = notation("218-225");
    let union = li1.union(&li2);
    assert!(union.to_string().contains(",210-216,218-226,229-232,"));
    assert_eq!(union.length(), li1.length() + 4);
}

#[test]
fn to_sequence() {
    let values = vec![1, 2, 3, 4, 6, 9, 10, 13, 14, 15, 22, 23, 24, 25, 30];
    let s = FACTORY.to_sequence(values.iter().copied()).unwrap();
    assert_eq!(s.length(), values.len() as u64);
    assert_eq!(s.interval_count(), 6);
    assert_eq!(s.values().collect::<Vec<_>>(), values);
}

#[test]
fn empty_sequence() {
    let empty = FACTORY.empty();
    assert_eq!(empty.length(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.first_value().unwrap_err().kind(), ErrorKind::EmptySequence);
    assert_eq!(empty.last_value().unwrap_err().kind(), ErrorKind::EmptySequence);
}

#[test]
fn values_are_not_shared() {
    let s = FACTORY.singleton(0).unwrap();
    let s1 = s.append(1).unwrap();
    assert_eq!(s.last_value(), Ok(0));
    assert_eq!(s1.last_value(), Ok(1));

    let mut rows = vec![[0, 5], [9, 19]];
    let s2 = FACTORY.from_arrays(&rows).unwrap();
    rows[1][1] = 2;
    assert_eq!(s2.last_value(), Ok(19));
}

#[test]
fn invalid_construction() {
    let cases: [(&[(i64, i64)], ErrorKind); 4] = [
        (&[(1, 3), (3, 5), (9, 13)], ErrorKind::Overlap),
        (&[(1, 3), (5, 9), (15, 10)], ErrorKind::InvalidRange),
        (&[(1, 3), (-5, 10), (7, 11)], ErrorKind::ConstraintViolation),
        (&[(1, 3), (5, -8), (-5, 9)], ErrorKind::InvalidRange),
    ];
    for (pairs, kind) in cases {
        let err = FACTORY.from_pairs(pairs.iter().copied()).unwrap_err();
        assert_eq!(err.kind(), kind, "{pairs:?}: {err}");
    }

    let rows: Vec<Vec<i64>> = vec![vec![1, 2], vec![4, 5, 6], vec![9, 10]];
    assert_eq!(
        FACTORY.from_arrays(rows).unwrap_err().kind(),
        ErrorKind::InvalidRange
    );
}

#[test]
fn append() {
    let s = seq(&[(2, 6), (17, 18), (29, 40)]);
    assert_eq!(
        s.append(10).unwrap_err().kind(),
        ErrorKind::NonMonotonicAppend
    );
    assert_eq!(
        s.append(-10).unwrap_err().kind(),
        ErrorKind::ConstraintViolation
    );
    assert_eq!(
        FACTORY.empty().append(-1).unwrap_err().kind(),
        ErrorKind::ConstraintViolation
    );
    assert_eq!(s.append(41).unwrap().to_string(), "2-6,17-18,29-41");
    assert_eq!(s.append(42).unwrap().to_string(), "2-6,17-18,29-40,42");
}

#[test]
fn after_and_close() {
    let s = seq(&[(2, 5), (7, 9)]);
    assert_eq!(s.after(6).values().collect::<Vec<_>>(), vec![7, 8, 9]);
    assert!(s.after(9).is_empty());
    assert_eq!(s.close(7).values().collect::<Vec<_>>(), vec![2, 3, 4, 5, 7]);
}

#[test]
fn unconstrained_sequences_hold_negative_values() {
    let s = Sequence::<intseq::Unconstrained>::from_pairs([(-10, -5), (-3, 2)]).unwrap();
    assert_eq!(s.length(), 12);
    assert_eq!(s.after(-4).first_value(), Ok(-3));
    assert_eq!(s.append(3).unwrap().interval_count(), 2);
    assert!(s.with_policy::<intseq::NonNegative>().is_err());
}
