use rand::Rng;

const CODE_LEN: usize = 8;
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random coupon code: 8 uppercase alphanumeric characters. Codes are
/// display tokens only (coupons are addressed by id), so no uniqueness
/// check is made.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_eight_chars() {
        assert_eq!(generate().len(), 8);
    }

    #[test]
    fn code_draws_only_from_uppercase_alphanumerics() {
        for _ in 0..50 {
            let code = generate();
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn codes_vary() {
        let codes: std::collections::HashSet<String> = (0..20).map(|_| generate()).collect();
        assert!(codes.len() > 1);
    }
}
