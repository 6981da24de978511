use rand::Rng;

/// Opaque session token: 64 lowercase hex characters.
pub fn generate_session_token() -> String {
    let mut rng = rand::rng();
    (0..64)
        .map(|_| {
            let n: u8 = rng.random_range(0..16);
            char::from_digit(n as u32, 16).unwrap_or('0')
        })
        .collect()
}

/// QR payload for a student card, prefixed for easy recognition on scan.
pub fn generate_qr_code(nis: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..8)
        .map(|_| {
            let n: u8 = rng.random_range(0..16);
            char::from_digit(n as u32, 16).unwrap_or('0')
        })
        .collect();
    format!("SISWA-{nis}-{suffix}")
}

/// Random password for the seeded admin when none is configured.
pub fn generate_password(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_is_64_hex_chars() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_tokens_differ() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    #[test]
    fn qr_code_embeds_nis() {
        let qr = generate_qr_code("20240001");
        assert!(qr.starts_with("SISWA-20240001-"));
    }

    #[test]
    fn generated_password_has_requested_length() {
        assert_eq!(generate_password(16).len(), 16);
    }
}
