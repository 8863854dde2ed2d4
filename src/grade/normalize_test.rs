use super::*;

#[test]
fn strips_diacritics_and_spaces() {
    assert_eq!(normalize_key("Câu 7"), "cau7");
    assert_eq!(normalize_key("Câu 07"), "cau7");
    assert_eq!(normalize_key("  Đáp án  "), "dapan");
}

#[test]
fn lowercases_and_drops_punctuation() {
    assert_eq!(normalize_key("CAU_7!"), "cau7");
    assert_eq!(normalize_key("Cau-07 (a)"), "cau07a");
    assert_eq!(normalize_key("Mã đề"), "made");
}

#[test]
fn collapses_zero_padded_suffix() {
    assert_eq!(normalize_key("cau007"), "cau7");
    assert_eq!(normalize_key("cau010"), "cau10");
    assert_eq!(normalize_key("cau0"), "cau0");
    assert_eq!(normalize_key("cau00"), "cau0");
}

#[test]
fn leaves_unpadded_numbers_alone() {
    assert_eq!(normalize_key("cau10"), "cau10");
    assert_eq!(normalize_key("134"), "134");
}

#[test]
fn idempotent_on_adversarial_inputs() {
    let cases = [
        "Câu 07",
        "cau007",
        "  CAU 0010  ",
        "Đáp án_134",
        "đề",
        "CLO1.2",
        "",
        "007",
        "x0y0",
    ];
    for case in cases {
        let once = normalize_key(case);
        let twice = normalize_key(&once);
        assert_eq!(once, twice, "normalize must be idempotent for {case:?}");
    }
}

#[test]
fn empty_and_symbol_only_inputs() {
    assert_eq!(normalize_key(""), "");
    assert_eq!(normalize_key("  ?!  "), "");
}

#[test]
fn normalize_code_uppercases_and_scrubs_nan() {
    assert_eq!(normalize_code("  a "), "A");
    assert_eq!(normalize_code("clo1.2"), "CLO1.2");
    assert_eq!(normalize_code("nan"), "");
    assert_eq!(normalize_code("NaN"), "");
    assert_eq!(normalize_code(""), "");
}

#[test]
fn trailing_number_strips_leading_zeros() {
    assert_eq!(trailing_number("cau07"), Some("7".to_string()));
    assert_eq!(trailing_number("cau7"), Some("7".to_string()));
    assert_eq!(trailing_number("cau000"), Some("0".to_string()));
    assert_eq!(trailing_number("cau"), None);
    assert_eq!(trailing_number("134"), Some("134".to_string()));
}
