//! End-to-end CONCAT scenarios, including the worked examples from the ESMA
//! transaction reporting guidelines.

use mifir_core::compute_concat;
use mifir_model::ErrorKind;

fn assert_concat(country: &str, date: &str, first: &str, last: &str, expected: &str) {
    let code = compute_concat(country, date, first, last)
        .unwrap_or_else(|error| panic!("{country}|{date}|{first}|{last}: {error}"));
    assert_eq!(code.as_str(), expected, "{country}|{date}|{first}|{last}");
}

fn assert_rejected(country: &str, date: &str, first: &str, last: &str, kind: ErrorKind) {
    let error = compute_concat(country, date, first, last)
        .expect_err("input should be rejected");
    assert_eq!(error.kind(), kind, "{country}|{date}|{first}|{last}");
}

#[test]
fn expected_codes() {
    assert_concat("NO", "19801224", "Jon", "Snow", "NO19801224JON##SNOW#");
    assert_concat("GB", "19800122", "Sir Jon", "Snow", "GB19800122JON##SNOW#");
    assert_concat("US", "19800502", "Dr. Robert", "Ford", "US19800502ROBERFORD#");
}

#[test]
fn guideline_examples() {
    assert_concat("IE", "19800113", "John", "O'Brian", "IE19800113JOHN#OBRIA");
    assert_concat("HU", "19810214", "Ludwig", "Van der Rohe", "HU19810214LUDWIROHE#");
    assert_concat("US", "19730322", "Victor", "Vandenberg", "US19730322VICTOVANDE");
    assert_concat("NO", "19760315", "Eli", "Ødegård", "NO19760315ELI##ODEGA");
    assert_concat("LU", "19660416", "Willeke", "de Bruijn", "LU19660416WILLEBRUIJ");
    assert_concat("US", "19650417", "Jon Ian", "Dewitt", "US19650417JON##DEWIT");
    assert_concat(
        "PT",
        "19900517",
        "Amy-Ally",
        "Garção de Magalhães",
        "PT19900517AMYALGARCA",
    );
    assert_concat("FR", "19900618", "Giovani", "dos Santos", "FR19900618GIOVASANTO");
    assert_concat("DE", "19800715", "Günter", "Voẞ", "DE19800715GUNTEVOS##");
}

#[test]
fn guideline_inline_examples() {
    assert_concat("IE", "19760227", "SEAN", "MURPHY", "IE19760227SEAN#MURPH");
    assert_concat("IE", "19511212", "THOMAS", "MACCORMACK", "IE19511212THOMAMACCO");
    assert_concat("FR", "19760227", "PIERRE MARIE", "DUPONT", "FR19760227PIERRDUPON");
}

#[test]
fn title_and_prefix_are_both_removed() {
    assert_concat("NL", "19550126", "Eddie", "Dr. Van Halen", "NL19550126EDDIEHALEN");
}

#[test]
fn lone_title_is_kept() {
    assert_concat("GB", "19700101", "Sir", "Dame", "GB19700101SIR##DAME#");
}

#[test]
fn rejected_inputs() {
    assert_rejected("NX", "19801224", "Mr Jon", "Anderson", ErrorKind::InvalidCountryCode);
    assert_rejected("NO", "19801224", "", "", ErrorKind::EmptyName);
    assert_rejected("NO", "198012241", "Jon", "Snow", ErrorKind::InvalidDate);
    assert_rejected("NO", "1980122", "Jon", "Snow", ErrorKind::InvalidDate);
    assert_rejected("UK", "19800122", "Sir Jon", "Snow", ErrorKind::InvalidCountryCode);
    assert_rejected("NOK", "19800122", "Sir Jon", "Snow", ErrorKind::InvalidCountryCode);
    assert_rejected("NO", "19801324", "Jon", "Snow", ErrorKind::InvalidDate);
}
