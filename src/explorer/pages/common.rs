use crate::explorer::consts::{ID_PREFIX_LEN, ID_SUFFIX_LEN};

/// Symbol for a fully qualified coin type: whatever follows the last `:`.
pub fn coin_symbol(coin_type: &str) -> &str {
    match coin_type.rfind(':') {
        Some(i) => &coin_type[i + 1..],
        None => coin_type,
    }
}

/// Signed smallest-unit amount, or `None` when the string isn't an integer.
pub fn parse_amount(raw: &str) -> Option<i128> {
    raw.trim().parse::<i128>().ok()
}

/// Full-precision balance: shift by `decimals`, drop trailing fractional zeros,
/// group the integer part by thousands. Unparseable input is returned as-is.
pub fn fmt_balance(raw: &str, decimals: u32) -> String {
    let Some(amount) = parse_amount(raw) else {
        return raw.to_string();
    };
    let scale = 10u128.pow(decimals);
    let abs = amount.unsigned_abs();
    let whole = group_thousands(&(abs / scale).to_string());
    let frac = abs % scale;
    let sign = if amount < 0 { "-" } else { "" };

    if frac == 0 {
        return format!("{sign}{whole}");
    }
    let frac = format!("{frac:0width$}", width = decimals as usize);
    format!("{sign}{whole}.{}", frac.trim_end_matches('0'))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `0x1234...abcd` style id for link labels.
pub fn short_id(id: &str) -> String {
    if id.len() <= ID_PREFIX_LEN + ID_SUFFIX_LEN + 3 || !id.is_ascii() {
        return id.to_string();
    }
    format!("{}...{}", &id[..ID_PREFIX_LEN], &id[id.len() - ID_SUFFIX_LEN..])
}

/// `(package, module, name)` from a Move type path such as
/// `0x2::coin::Coin<0x2::sui::SUI>`. Missing segments come back empty.
pub fn split_object_type(object_type: &str) -> (&str, &str, &str) {
    let base = object_type.split('<').next().unwrap_or_default();
    let mut parts = base.split("::");
    let package = parts.next().unwrap_or_default();
    let module = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    (package, module, name)
}
