use ds_core::sort::{self, Sortable};
use ds_core::{Cursor, CursorError, CursorOptions, OrderingHook};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DATA: [i32; 5] = [1, 2, 3, 4, 5];

#[test]
fn seek_then_get_returns_the_indexed_element() {
    let mut c = Cursor::new(&DATA);
    for (i, want) in DATA.iter().enumerate() {
        assert_eq!(c.seek(i), Ok(want));
        assert_eq!(c.get(), Ok(want));
    }
}

#[test]
fn boundaries_leave_position_alone() {
    let mut c = Cursor::new(&DATA);
    c.last().unwrap();
    assert_eq!(c.next(), Err(CursorError::IndexOutOfRange));
    assert_eq!(c.position(), 4);

    c.first().unwrap();
    assert_eq!(c.prev(), Err(CursorError::IndexOutOfRange));
    assert_eq!(c.position(), 0);
}

#[rstest]
fn take_splits_at_count(#[values(0, 1, 2, 3, 4, 5)] count: usize) {
    let c = Cursor::new(&DATA);
    let (taken, rest) = c.take(count).unwrap();
    assert_eq!(taken.as_slice(), &DATA[..count]);
    assert_eq!(rest.as_slice(), &DATA[count..]);
    assert_eq!(rest.position(), 0);
}

#[test]
fn take_past_the_end_underflows() {
    let c = Cursor::new(&DATA);
    assert_eq!(c.take(6), Err(CursorError::Underflow));
    assert_eq!(c.as_slice(), &DATA);
}

#[test]
fn take_three_of_five() {
    let c = Cursor::new(&DATA);
    let (taken, rest) = c.take(3).unwrap();
    assert_eq!(taken, vec![1, 2, 3]);
    assert_eq!(rest.as_slice(), &[4, 5]);
    assert_eq!(rest.position(), 0);
}

#[rstest]
fn insert_at_len_is_out_of_range(#[values(usize::MAX, 100, 5)] capacity: usize) {
    let mut c = Cursor::with_options(&DATA, CursorOptions::default().with_capacity(capacity));
    assert_eq!(c.insert_at(5, [10]), Err(CursorError::IndexOutOfRange));
    assert_eq!(c.as_slice(), &DATA);
}

#[test]
fn append_is_visible_past_capacity() {
    let mut c = Cursor::with_options(&DATA, CursorOptions::default().with_capacity(5));
    c.append([6, 7, 8]).unwrap();
    assert_eq!(&c.as_slice()[5..], &[6, 7, 8]);
}

#[rstest]
#[case(0, vec![7, 8])]
#[case(3, vec![7, 8])]
#[case(3, vec![10, 20, 30])]
#[case(4, vec![])]
#[case(5, vec![1])]
fn replace_at_is_all_or_nothing(#[case] index: usize, #[case] values: Vec<i32>) {
    let c = Cursor::new(&DATA);
    let n = values.len();

    match c.replace_at(index, values.clone()) {
        Ok(out) => {
            assert_eq!(out.len(), DATA.len());
            assert_eq!(&out.as_slice()[index..index + n], values.as_slice());
            assert_eq!(&out.as_slice()[..index], &DATA[..index]);
            assert_eq!(&out.as_slice()[index + n..], &DATA[index + n..]);
        }
        Err(err) => {
            assert!(matches!(err, CursorError::Overflow | CursorError::IndexOutOfRange));
        }
    }
    assert_eq!(c.as_slice(), &DATA);
}

#[test]
fn replace_window_past_end_overflows() {
    let c = Cursor::new(&DATA);
    assert_eq!(
        c.replace_at(3, [10, 20, 30]).unwrap_err(),
        CursorError::Overflow
    );
    assert_eq!(c.as_slice(), &DATA);
}

#[test]
fn prepend_shifts_position() {
    let mut c = Cursor::new(&DATA);
    c.seek(1).unwrap();
    c.prepend([10, 20]).unwrap();
    assert_eq!(c.as_slice(), &[10, 20, 1, 2, 3, 4, 5]);
    assert_eq!(c.position(), 3);
    assert_eq!(c.get(), Ok(&2));
}

#[test]
fn external_sort_uses_the_hook() {
    let words = ["pear", "fig", "banana", "kiwi"];
    let opts = CursorOptions::default()
        .with_ordering(OrderingHook::by(|a: &&str, b: &&str| a.len() < b.len()));
    let mut c = Cursor::with_options(&words, opts);

    assert_eq!(Sortable::len(&c), 4);
    sort::sort(&mut c);

    let lengths: Vec<usize> = c.as_slice().iter().map(|w| w.len()).collect();
    assert_eq!(lengths, vec![3, 4, 4, 6]);
    assert!(sort::is_sorted(&c));
}

#[test]
fn index_based_hook() {
    let opts = CursorOptions::default()
        .with_ordering(OrderingHook::new(|buf: &[(i32, char)], i, j| buf[i].0 < buf[j].0));
    let mut c = Cursor::with_options(&[(30, 'c'), (10, 'a'), (20, 'b')], opts);

    sort::sort(&mut c);
    let letters: String = c.as_slice().iter().map(|&(_, ch)| ch).collect();
    assert_eq!(letters, "abc");
}
