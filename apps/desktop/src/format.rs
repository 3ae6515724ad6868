//! pt-BR display helpers.

/// `1234.5` -> `R$ 1.234,50`.
pub(crate) fn format_brl(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}R$ {},{:02}", group_thousands(cents / 100), cents % 100)
}

/// Signed, one decimal, halves away from zero: `4.25` -> `+4,3%`.
pub(crate) fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:+.1}%").replace('.', ",")
}

pub(crate) fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
