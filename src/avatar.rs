use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::ValueEnum;

/// How identity references are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AvatarStyle {
    /// Remote portrait photo picked from a fixed catalogue.
    #[default]
    Portrait,
    /// Locally rendered SVG monogram encoded as a data URI.
    Monogram,
}

/// Position of a name inside the avatar catalogue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhotoSlot {
    /// `photo_id % 2`; picks one of the two portrait pools.
    pub category: u32,
    /// `(photo_id % 99) + 1`, always in `1..=99`.
    pub index: u32,
    /// `|hash| % 1000`.
    pub photo_id: u32,
}

const POOLS: [&str; 2] = ["men", "women"];

const PALETTE: [&str; 8] = [
    "#0a66c2", "#057642", "#b24020", "#5f4b8b", "#915907", "#1f7a8c", "#c4366f", "#44546a",
];

/// Whitespace as matched by a JavaScript `\s` class: Unicode `White_Space`
/// minus U+0085, plus the byte-order mark U+FEFF.
fn is_seed_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Lowercases `name` and removes all whitespace.
///
/// The whole string is lowercased first so context-sensitive mappings such
/// as a word-final sigma apply before spaces are dropped.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !is_seed_space(*c))
        .collect()
}

/// Classic 31-multiplier string hash over UTF-16 code units with 32-bit
/// signed wraparound at every step.
///
/// ```
/// use vent::avatar::name_hash;
/// assert_eq!(name_hash(""), 0);
/// assert_eq!(name_hash("a"), 97);
/// ```
pub fn name_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Maps a display name onto its catalogue slot.
pub fn photo_slot(name: &str) -> PhotoSlot {
    let photo_id = name_hash(&normalize(name)).unsigned_abs() % 1000;
    PhotoSlot {
        category: photo_id % 2,
        index: photo_id % 99 + 1,
        photo_id,
    }
}

/// Returns a stable image URI for `name` rendered at `size` pixels.
///
/// Equal names after [`normalize`] and equal sizes always produce the same
/// reference.
///
/// ```
/// use vent::avatar::{AvatarStyle, identity_for};
/// assert_eq!(
///     identity_for(AvatarStyle::Portrait, "", 40),
///     "https://randomuser.me/api/portraits/men/1.jpg"
/// );
/// ```
pub fn identity_for(style: AvatarStyle, name: &str, size: u32) -> String {
    let slot = photo_slot(name);
    match style {
        AvatarStyle::Portrait => format!(
            "https://randomuser.me/api/portraits/{}/{}.jpg",
            POOLS[slot.category as usize], slot.index
        ),
        AvatarStyle::Monogram => monogram(&normalize(name), size, slot),
    }
}

/// Up to two letters taken from a normalized seed.
fn initials(seed: &str) -> String {
    let letters: String = seed
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

fn monogram(seed: &str, size: u32, slot: PhotoSlot) -> String {
    let size = size.max(1);
    let half = size as f32 / 2.0;
    let color = PALETTE[slot.photo_id as usize % PALETTE.len()];
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
            r#"<circle cx="{h}" cy="{h}" r="{h}" fill="{c}"/>"#,
            r##"<text x="50%" y="50%" dy=".35em" text-anchor="middle" fill="#ffffff" "##,
            r#"font-family="Helvetica,Arial,sans-serif" font-size="{f}">{t}</text></svg>"#
        ),
        s = size,
        h = half,
        c = color,
        f = (size as f32 * 0.4).round(),
        t = initials(seed),
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_maps_to_first_slot() {
        let slot = photo_slot("");
        assert_eq!(slot.category, 0);
        assert_eq!(slot.index, 1);
        assert_eq!(photo_slot("   \t ").index, 1);
    }

    #[test]
    fn hash_wraps_to_negative() {
        assert_eq!(name_hash("sarahmitchell"), -511_141_165);
        assert_eq!(photo_slot("Sarah Mitchell").photo_id, 165);
    }

    #[test]
    fn min_hash_does_not_overflow() {
        // |i32::MIN| = 2147483648
        assert_eq!(i32::MIN.unsigned_abs() % 1000, 648);
    }

    #[test]
    fn initials_fall_back_for_blank_names() {
        assert_eq!(initials("janedoe"), "JA");
        assert_eq!(initials("ryano'connor"), "RY");
        assert_eq!(initials("'.-"), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn normalize_matches_script_whitespace() {
        assert_eq!(normalize("a\u{feff}b"), "ab");
        assert_eq!(normalize("a\u{a0}b\u{3000}c"), "abc");
        assert_eq!(normalize("a\u{85}b"), "a\u{85}b");
    }

    #[test]
    fn normalize_lowercases_whole_string() {
        assert_eq!(normalize("ΟΔΟΣ"), "οδο\u{3c2}");
        assert_eq!(normalize("Ο ΔΟΣ"), "οδο\u{3c2}");
    }

    #[test]
    fn monogram_ignores_case_and_spacing() {
        let spaced = identity_for(AvatarStyle::Monogram, "Jessica Chen", 32);
        assert_eq!(spaced, identity_for(AvatarStyle::Monogram, "jessicachen", 32));
        assert_eq!(spaced, identity_for(AvatarStyle::Monogram, "JessicaChen", 32));
    }

    #[test]
    fn monogram_depends_on_size() {
        let small = identity_for(AvatarStyle::Monogram, "Kevin Lee", 32);
        let large = identity_for(AvatarStyle::Monogram, "Kevin Lee", 40);
        assert!(small.starts_with("data:image/svg+xml;base64,"));
        assert_ne!(small, large);
    }
}
