//! Number formatting for axis ticks, legend labels and tooltips

/// Label format for a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Up to 12 significant digits with thousands separators, e.g. `1,000` or `0.01`
    Grouped,
    /// Rounded to an integer with thousands separators
    GroupedInteger,
    /// Fixed number of decimals, no grouping
    Fixed(usize),
}

impl NumberFormat {
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                "NaN".to_string()
            } else if value > 0.0 {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            };
        }

        match self {
            NumberFormat::Grouped => group_thousands(&significant(value, 12)),
            NumberFormat::GroupedInteger => group_thousands(&format!("{}", value.round())),
            NumberFormat::Fixed(decimals) => format!("{:.*}", decimals, value),
        }
    }
}

/// Shortest decimal string of `value` rounded to `digits` significant digits
fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let rounded: f64 = format!("{:.*}", decimals, value).parse().unwrap_or(value);
    format!("{}", rounded)
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" reads oddly on an axis
    let sign = if grouped == "0" && frac_part.is_none() { "" } else { sign };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Raw value as shown in a tooltip; missing values show as empty text
pub fn display_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{}", value)
    }
}
