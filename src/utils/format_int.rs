use std::fmt;

/// Integer formatted with digit-group delimiters for stats output.
pub struct NiceInt(String);

impl NiceInt {
    pub fn from_usize(value: usize) -> Self {
        Self::from(value as u64)
    }

    pub fn from_f64(value: f64) -> Self {
        NiceInt(with_delimiters(value as i128))
    }
}

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        NiceInt(with_delimiters(value as i128))
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn with_delimiters(value: i128) -> String {
    let mut result = value
        .abs()
        .to_string()
        .chars()
        .rev()
        .collect::<Vec<char>>()
        .chunks(3)
        .map(|c| c.iter().rev().collect::<String>())
        .rev()
        .collect::<Vec<String>>()
        .join("'");
    if value < 0 {
        result.insert(0, '-');
    }
    result
}
