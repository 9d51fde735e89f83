//! Presentation text helpers — CPF masking and pt-BR currency.

/// Format an 11-digit CPF as `123.456.789-01`.
///
/// Anything that is not exactly 11 ASCII digits passes through
/// unchanged, so already-formatted or malformed ids render as-is.
pub fn format_cpf(cpf: &str) -> String {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..])
    } else {
        cpf.to_string()
    }
}

/// Format integer cents as pt-BR currency text: `R$ 1.234,56`.
///
/// Thousands are dot-separated, the decimal separator is a comma, and
/// negative amounts keep a leading minus (`-R$ 0,01`).
pub fn format_brl_cents(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let reais = (abs / 100).to_string();
    let centavos = abs % 100;

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, ch) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{centavos:02}")
}
