use nebula_random::{
    DEFAULT_ENTROPY, RandomConfig, SecureRandom, token_hex, token_hex_default, token_urlsafe,
    token_urlsafe_default,
};

#[test]
fn test_token_hex_length() {
    for n in 0..100 {
        assert_eq!(token_hex(n).unwrap().len(), n * 2);
    }
}

#[test]
fn test_token_hex_empty() {
    assert_eq!(token_hex(0).unwrap(), "");
}

#[test]
fn test_token_hex_alphabet() {
    let token = token_hex(256).unwrap();

    assert!(token.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
}

#[test]
fn test_token_hex_default_no_collision() {
    let mut previous = String::new();

    for _ in 0..100 {
        let token = token_hex_default().unwrap();
        assert_eq!(token.len(), DEFAULT_ENTROPY * 2);
        assert_ne!(token, previous);
        previous = token;
    }
}

#[test]
fn test_token_urlsafe_length() {
    for n in 0..100 {
        assert_eq!(token_urlsafe(n).unwrap().len(), (n * 4).div_ceil(3));
    }
}

#[test]
fn test_token_urlsafe_alphabet() {
    for n in [1, 2, 3, 31, 32, 33, 512] {
        let token = token_urlsafe(n).unwrap();
        assert!(
            token
                .bytes()
                .all(|c| c.is_ascii_alphanumeric() || c == b'-' || c == b'_'),
            "{token}"
        );
    }
}

#[test]
fn test_token_urlsafe_default_length() {
    assert_eq!(token_urlsafe_default().unwrap().len(), 43);
}

#[test]
fn test_configured_default_entropy() {
    let config = RandomConfig {
        default_entropy: 16,
        ..RandomConfig::default()
    };
    let mut rng = SecureRandom::with_config(nebula_random::OsRng, config).unwrap();

    assert_eq!(rng.token_hex_default().unwrap().len(), 32);
    assert_eq!(rng.token_urlsafe_default().unwrap().len(), 22);
}
