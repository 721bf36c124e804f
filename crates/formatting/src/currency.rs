/// Formats integer cents as US dollars, e.g. `150000` → `"$1,500.00"`.
pub fn format_currency(cents: i64) -> String {
    let magnitude = cents.unsigned_abs();
    let dollars = group_thousands(magnitude / 100);
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", magnitude % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
