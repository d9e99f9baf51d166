#![no_main]

use libfuzzer_sys::fuzz_target;

use textbook_sort::stable::merge_sort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data[..data.len().min(4096)].to_vec();
    let mut expected = v.clone();
    expected.sort();

    test_sort::sort(&mut v);
    assert_eq!(v, expected);
});
