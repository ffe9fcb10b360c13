mod common;

use common::{HEADERS, inventory_row, num, text};
use sticker_sheet::{
    Cell, ColumnIndex, FieldAliases, FieldColumns, LabelFields, Row, display_text, format_count,
    format_karat, format_weight,
};

#[test]
fn counts_round_to_whole_numbers() {
    assert_eq!(format_count(&num(3.6)), "4");
    assert_eq!(format_count(&num(3.4)), "3");
    assert_eq!(format_count(&num(12.0)), "12");
    assert_eq!(format_count(&text("7")), "7");
    assert_eq!(format_count(&text(" 2.7 ")), "3");
}

#[test]
fn count_ties_round_to_even() {
    assert_eq!(format_count(&num(2.5)), "2");
    assert_eq!(format_count(&num(3.5)), "4");
    assert_eq!(format_count(&num(-0.5)), "0");
}

#[test]
fn missing_counts_are_zero() {
    assert_eq!(format_count(&Cell::Empty), "0");
    assert_eq!(format_count(&num(f64::NAN)), "0");
    assert_eq!(format_count(&text("")), "0");
}

#[test]
fn non_numeric_counts_pass_through() {
    assert_eq!(format_count(&text("abc")), "abc");
    assert_eq!(format_count(&text("12 pcs")), "12 pcs");
    assert_eq!(format_count(&text("inf")), "inf");
}

#[test]
fn weights_have_two_decimals() {
    assert_eq!(format_weight(&num(1.5)), "1.50");
    assert_eq!(format_weight(&num(0.0)), "0.00");
    assert_eq!(format_weight(&num(12.0)), "12.00");
    assert_eq!(format_weight(&num(0.245_1)), "0.25");
    assert_eq!(format_weight(&text("3.14159")), "3.14");
}

#[test]
fn weight_rounding_follows_the_binary_value() {
    // 2.675 and 1.005 are stored just below the halfway point
    assert_eq!(format_weight(&num(2.675)), "2.67");
    assert_eq!(format_weight(&num(1.005)), "1.00");
    // 0.375 is exactly representable
    assert_eq!(format_weight(&num(0.375)), "0.38");
    assert_eq!(format_weight(&num(2.6751)), "2.68");
}

#[test]
fn missing_weights_are_zero() {
    assert_eq!(format_weight(&Cell::Empty), "0.00");
    assert_eq!(format_weight(&num(f64::NAN)), "0.00");
    assert_eq!(format_weight(&text("   ")), "0.00");
}

#[test]
fn non_numeric_weights_are_trimmed() {
    assert_eq!(format_weight(&text(" approx 2g ")), "approx 2g");
    assert_eq!(format_weight(&text("N/A")), "N/A");
}

#[test]
fn karat_gets_a_single_suffix() {
    assert_eq!(format_karat(&num(18.0)), "18K");
    assert_eq!(format_karat(&num(17.6)), "18K");
    assert_eq!(format_karat(&text("14")), "14K");
    assert_eq!(format_karat(&text("18k")), "18K");
    assert_eq!(format_karat(&text(" 14k ")), "14K");
    assert_eq!(format_karat(&text("Whitek")), "WhiteK");
    assert_eq!(format_karat(&text("22K")), "22K");
    assert_eq!(format_karat(&text(" Rose ")), "RoseK");
}

#[test]
fn blank_karat_is_an_empty_line() {
    assert_eq!(format_karat(&Cell::Empty), "");
    assert_eq!(format_karat(&text("   ")), "");
    assert_eq!(format_karat(&num(f64::NAN)), "");
}

#[test]
fn identifiers_print_without_float_noise() {
    assert_eq!(display_text(&num(1001.0)), "1001");
    assert_eq!(display_text(&num(12.5)), "12.5");
    assert_eq!(display_text(&text("R-100/A")), "R-100/A");
    assert_eq!(display_text(&Cell::Empty), "");
}

#[test]
fn label_fields_from_a_full_row() {
    let index = ColumnIndex::build(&HEADERS);
    let columns = FieldColumns::resolve(&index, &FieldAliases::default());
    let row = inventory_row(text("R-100"), num(5501.0));
    let fields = LabelFields::from_row(&row, &columns);
    assert_eq!(
        fields,
        LabelFields {
            style: "R-100".into(),
            karat: "18K".into(),
            diamond: "Dia: 12 / 0.24".into(),
            gem: "Gem: 3 / 1.50".into(),
            weights: "Gross: 5.68 / Net: 4.90".into(),
            stock_code: "5501".into(),
        }
    );
}

#[test]
fn label_fields_default_missing_columns() {
    let index = ColumnIndex::build(&["STYLE NO", "stock code"]);
    let columns = FieldColumns::resolve(&index, &FieldAliases::default());
    let row = Row::new(vec![text("R-9"), text("S9")]);
    let fields = LabelFields::from_row(&row, &columns);
    assert_eq!(fields.karat, "");
    assert_eq!(fields.diamond, "Dia: 0 / 0.00");
    assert_eq!(fields.gem, "Gem: 0 / 0.00");
    assert_eq!(fields.weights, "Gross: 0.00 / Net: 0.00");
    assert_eq!(fields.stock_code, "S9");
}
