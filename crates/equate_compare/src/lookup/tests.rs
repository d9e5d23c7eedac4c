use pretty_assertions::assert_eq;

use super::*;

#[test]
fn byte_search_uses_byte_view() {
    // Would trip ByteComparer's reserved search in debug builds otherwise.
    let bytes = b"hello, world";
    assert_eq!(index_of(bytes, &b'o'), Some(4));
    assert_eq!(last_index_of(bytes, &b'o'), Some(8));
    assert_eq!(index_of(bytes, &b'z'), None);
}

#[test]
fn integer_search() {
    let block = [10, 20, 30, 20];
    assert_eq!(index_of(&block, &20), Some(1));
    assert_eq!(last_index_of(&block, &20), Some(3));
}

#[test]
fn empty_block() {
    assert_eq!(index_of::<i64>(&[], &1), None);
    assert_eq!(last_index_of::<i64>(&[], &1), None);
    assert_eq!(last_index_of::<u8>(&[], &1), None);
}

#[test]
fn string_search() {
    let names = ["ada".to_owned(), "grace".to_owned(), "ada".to_owned()];
    assert_eq!(index_of(&names, &"ada".to_owned()), Some(0));
    assert_eq!(last_index_of(&names, &"ada".to_owned()), Some(2));
}

#[test]
fn nullable_search() {
    let block = [Some(5), None, Some(5)];
    assert_eq!(index_of(&block, &None), Some(1));
    assert_eq!(last_index_of(&block, &Some(5)), Some(2));
}
