//! Diacritic + case folding for search comparison.
//!
//! [`fold`] maps every character to exactly one folded character, so the
//! folded string and the original have identical char counts and char
//! indices computed against the folded copy are valid in the original. The
//! matcher relies on this; see [`crate::matcher`].
//!
//! The accent table covers the canonical Latin diacritics: acute, grave,
//! circumflex, tilde, umlaut/diaeresis, cedilla, macron, breve, caron,
//! ogonek, dot-above, double-acute, double-grave, ring-above, horn, stroke,
//! and inverted-breve. Anything not in the table is case-folded when its
//! lowercase form is a single character, and passed through untouched
//! otherwise.

use phf::phf_map;

/// Accented Latin letters to their unaccented lowercase base.
///
/// Both cases are listed explicitly so the map lookup alone settles accented
/// input; plain ASCII never reaches it.
static DIACRITIC_FOLD: phf::Map<char, char> = phf_map! {
    'à' => 'a', 'á' => 'a', 'â' => 'a', 'ã' => 'a', 'ä' => 'a', 'å' => 'a',
    'ā' => 'a', 'ă' => 'a', 'ą' => 'a', 'ǎ' => 'a', 'ȁ' => 'a', 'ȃ' => 'a',
    'À' => 'a', 'Á' => 'a', 'Â' => 'a', 'Ã' => 'a', 'Ä' => 'a', 'Å' => 'a',
    'Ā' => 'a', 'Ă' => 'a', 'Ą' => 'a', 'Ǎ' => 'a', 'Ȁ' => 'a', 'Ȃ' => 'a',
    'ç' => 'c', 'ć' => 'c', 'ĉ' => 'c', 'ċ' => 'c', 'č' => 'c',
    'Ç' => 'c', 'Ć' => 'c', 'Ĉ' => 'c', 'Ċ' => 'c', 'Č' => 'c',
    'ď' => 'd', 'đ' => 'd',
    'Ď' => 'd', 'Đ' => 'd',
    'è' => 'e', 'é' => 'e', 'ê' => 'e', 'ë' => 'e', 'ē' => 'e', 'ĕ' => 'e',
    'ė' => 'e', 'ę' => 'e', 'ě' => 'e', 'ȅ' => 'e', 'ȇ' => 'e',
    'È' => 'e', 'É' => 'e', 'Ê' => 'e', 'Ë' => 'e', 'Ē' => 'e', 'Ĕ' => 'e',
    'Ė' => 'e', 'Ę' => 'e', 'Ě' => 'e', 'Ȅ' => 'e', 'Ȇ' => 'e',
    'ĝ' => 'g', 'ğ' => 'g', 'ġ' => 'g', 'ģ' => 'g', 'ǧ' => 'g',
    'Ĝ' => 'g', 'Ğ' => 'g', 'Ġ' => 'g', 'Ģ' => 'g', 'Ǧ' => 'g',
    'ĥ' => 'h', 'ħ' => 'h',
    'Ĥ' => 'h', 'Ħ' => 'h',
    'ì' => 'i', 'í' => 'i', 'î' => 'i', 'ï' => 'i', 'ĩ' => 'i', 'ī' => 'i',
    'ĭ' => 'i', 'į' => 'i', 'ı' => 'i', 'ǐ' => 'i', 'ȉ' => 'i', 'ȋ' => 'i',
    'Ì' => 'i', 'Í' => 'i', 'Î' => 'i', 'Ï' => 'i', 'Ĩ' => 'i', 'Ī' => 'i',
    'Ĭ' => 'i', 'Į' => 'i', 'İ' => 'i', 'Ǐ' => 'i', 'Ȉ' => 'i', 'Ȋ' => 'i',
    'ĵ' => 'j',
    'Ĵ' => 'j',
    'ķ' => 'k',
    'Ķ' => 'k',
    'ĺ' => 'l', 'ļ' => 'l', 'ľ' => 'l', 'ŀ' => 'l', 'ł' => 'l',
    'Ĺ' => 'l', 'Ļ' => 'l', 'Ľ' => 'l', 'Ŀ' => 'l', 'Ł' => 'l',
    'ñ' => 'n', 'ń' => 'n', 'ņ' => 'n', 'ň' => 'n',
    'Ñ' => 'n', 'Ń' => 'n', 'Ņ' => 'n', 'Ň' => 'n',
    'ò' => 'o', 'ó' => 'o', 'ô' => 'o', 'õ' => 'o', 'ö' => 'o', 'ø' => 'o',
    'ō' => 'o', 'ŏ' => 'o', 'ő' => 'o', 'ơ' => 'o', 'ǒ' => 'o', 'ȍ' => 'o',
    'ȏ' => 'o',
    'Ò' => 'o', 'Ó' => 'o', 'Ô' => 'o', 'Õ' => 'o', 'Ö' => 'o', 'Ø' => 'o',
    'Ō' => 'o', 'Ŏ' => 'o', 'Ő' => 'o', 'Ơ' => 'o', 'Ǒ' => 'o', 'Ȍ' => 'o',
    'Ȏ' => 'o',
    'ŕ' => 'r', 'ŗ' => 'r', 'ř' => 'r', 'ȑ' => 'r', 'ȓ' => 'r',
    'Ŕ' => 'r', 'Ŗ' => 'r', 'Ř' => 'r', 'Ȑ' => 'r', 'Ȓ' => 'r',
    'ś' => 's', 'ŝ' => 's', 'ş' => 's', 'š' => 's', 'ș' => 's',
    'Ś' => 's', 'Ŝ' => 's', 'Ş' => 's', 'Š' => 's', 'Ș' => 's',
    'ţ' => 't', 'ť' => 't', 'ŧ' => 't', 'ț' => 't',
    'Ţ' => 't', 'Ť' => 't', 'Ŧ' => 't', 'Ț' => 't',
    'ù' => 'u', 'ú' => 'u', 'û' => 'u', 'ü' => 'u', 'ũ' => 'u', 'ū' => 'u',
    'ŭ' => 'u', 'ů' => 'u', 'ű' => 'u', 'ų' => 'u', 'ư' => 'u', 'ǔ' => 'u',
    'ȕ' => 'u', 'ȗ' => 'u',
    'Ù' => 'u', 'Ú' => 'u', 'Û' => 'u', 'Ü' => 'u', 'Ũ' => 'u', 'Ū' => 'u',
    'Ŭ' => 'u', 'Ů' => 'u', 'Ű' => 'u', 'Ų' => 'u', 'Ư' => 'u', 'Ǔ' => 'u',
    'Ȕ' => 'u', 'Ȗ' => 'u',
    'ŵ' => 'w',
    'Ŵ' => 'w',
    'ý' => 'y', 'ÿ' => 'y', 'ŷ' => 'y',
    'Ý' => 'y', 'Ÿ' => 'y', 'Ŷ' => 'y',
    'ź' => 'z', 'ż' => 'z', 'ž' => 'z',
    'Ź' => 'z', 'Ż' => 'z', 'Ž' => 'z',
};

/// Fold a single character: strip its diacritic and lowercase it.
///
/// Characters whose lowercase expansion is not exactly one character (e.g.
/// U+0130 outside the table) pass through unchanged to keep the one-to-one
/// char correspondence.
pub fn fold_char(c: char) -> char {
    if let Some(&base) = DIACRITIC_FOLD.get(&c) {
        return base;
    }
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string. `fold(s)` always has the same char count as `s`.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}
