/// Ordered alphabet used for column labels.
const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Converts a 1-based column index to its spreadsheet label.
///
/// Labels form a bijective base-26 numbering: digits run A(=1) to Z(=26) and
/// no digit stands for zero. A plain `index % 26` would misplace every "Z"
/// boundary (26, 52, 702, ...), so a zero remainder is read as 26 and the
/// quotient is reduced by the effective digit before dividing.
pub fn column_label(index: usize) -> String {
    if index <= 26 {
        return match index.checked_sub(1) {
            Some(position) => LETTERS[position].to_string(),
            None => String::new(),
        };
    }
    let mut label = String::new();
    let mut rest = index;
    while rest > 26 {
        let mut digit = rest % 26;
        if digit == 0 {
            digit = 26;
        }
        label.insert(0, LETTERS[digit - 1]);
        rest = (rest - digit) / 26;
    }
    if rest > 0 {
        label.insert(0, LETTERS[rest - 1]);
    }
    label
}

/// Converts a column label back to its 1-based index; the inverse of
/// [`column_label`]. Returns `None` for an empty label, characters outside
/// A-Z, or a label whose index does not fit in `usize`.
pub fn column_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for character in label.chars() {
        let character = character.to_ascii_uppercase();
        if !character.is_ascii_uppercase() {
            return None;
        }
        let digit = character as usize - 'A' as usize + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index)
}

/// Builds an Excel-style cell position from a 1-based column index and a
/// 1-based row number, e.g. `(1, 5)` becomes `"A5"`.
pub fn cell_position(column: usize, row: usize) -> String {
    format!("{}{}", column_label(column), row)
}
