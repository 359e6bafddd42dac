//! Process number normalisation.
//!
//! Tribunals hand out process numbers in the formatted CNJ style
//! ("0001234-56.2024.8.26.0100"), bare digit runs, or anything in between
//! copied out of a PDF. Upstream endpoints only accept the digit run, so
//! every identifier is reduced to digits before it goes on the wire.
//!
//! # CNJ numbering
//!
//! A full CNJ number has 20 digits: NNNNNNN-DD.AAAA.J.TR.OOOO
//! - NNNNNNN: sequential number within the originating court
//! - DD: check digits
//! - AAAA: filing year
//! - J: judicial segment (8 = state courts)
//! - TR: tribunal within the segment
//! - OOOO: originating court unit

/// Strip every non-digit character from a raw process identifier.
///
/// Returns an empty string when the input carries no digits at all;
/// callers decide whether that is an error.
pub fn somente_digitos(bruto: &str) -> String {
    bruto.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a 20-digit process number in CNJ display form.
///
/// "00012345620248260100" → "0001234-56.2024.8.26.0100". Inputs that are
/// not exactly 20 digits are returned unchanged; display formatting never
/// invents structure that is not there.
pub fn formatar_cnj(digitos: &str) -> String {
    if digitos.len() != 20 || !digitos.bytes().all(|b| b.is_ascii_digit()) {
        return digitos.to_string();
    }
    format!(
        "{}-{}.{}.{}.{}.{}",
        &digitos[..7],
        &digitos[7..9],
        &digitos[9..13],
        &digitos[13..14],
        &digitos[14..16],
        &digitos[16..20],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cnj_punctuation() {
        assert_eq!(
            somente_digitos("0001234-56.2024.8.26.0100"),
            "00012345620248260100"
        );
    }

    #[test]
    fn strips_mixed_noise() {
        assert_eq!(somente_digitos("1234-56.2024"), "1234562024");
        assert_eq!(somente_digitos(" 12 34 "), "1234");
        assert_eq!(somente_digitos("proc. nº 42/2023"), "422023");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(somente_digitos("999"), "999");
    }

    #[test]
    fn no_digits_yields_empty() {
        assert_eq!(somente_digitos("abc"), "");
        assert_eq!(somente_digitos(""), "");
        assert_eq!(somente_digitos("---..."), "");
    }

    #[test]
    fn formats_full_cnj_number() {
        assert_eq!(
            formatar_cnj("00012345620248260100"),
            "0001234-56.2024.8.26.0100"
        );
    }

    #[test]
    fn short_numbers_unchanged() {
        assert_eq!(formatar_cnj("999"), "999");
        assert_eq!(formatar_cnj(""), "");
    }

    #[test]
    fn non_digit_input_unchanged() {
        // 20 chars but not all digits.
        assert_eq!(formatar_cnj("0001234a620248260100"), "0001234a620248260100");
    }

    #[test]
    fn strip_then_format_roundtrip() {
        let exibido = "0001234-56.2024.8.26.0100";
        assert_eq!(formatar_cnj(&somente_digitos(exibido)), exibido);
    }
}
