use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{Error, Result};

lazy_static! {
    static ref ARGON_CONFIG: argon2::Config<'static> = argon2::Config::default();
}

/// Hash a password using argon2
pub fn hash_password(plaintext_password: String) -> Result<String> {
    argon2::hash_encoded(
        plaintext_password.as_bytes(),
        nanoid::nanoid!(24).as_bytes(),
        &ARGON_CONFIG,
    )
    .map_err(|_| Error::InternalError)
}

/// Derive a stable colour from a display name
fn stable_colour(name: &str) -> (u8, u8, u8) {
    if name.is_empty() {
        return (0xcc, 0xcc, 0xcc);
    }

    let mut hash: i32 = 0;
    for ch in name.chars() {
        hash = (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    (
        (hash & 0xff) as u8,
        ((hash >> 8) & 0xff) as u8,
        ((hash >> 16) & 0xff) as u8,
    )
}

/// Generate an initials avatar as an SVG data-URL
///
/// The background colour is derived from the name alone, so the same
/// student always gets the same avatar across sessions and devices.
pub fn initials_avatar(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|ch| ch.to_uppercase())
        .collect();

    let (r, g, b) = stable_colour(name);

    // Keep the initials legible on dark backgrounds
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    let text_colour = if luminance > 0.5 { "#333333" } else { "#FFFFFF" };

    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"150\" height=\"150\" viewBox=\"0 0 150 150\">\
            <rect width=\"100%\" height=\"100%\" fill=\"#{r:02x}{g:02x}{b:02x}\" />\
            <text x=\"50%\" y=\"55%\" font-family=\"Arial, sans-serif\" font-size=\"60\" fill=\"{text_colour}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{initials}</text>\
        </svg>"
    );

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
