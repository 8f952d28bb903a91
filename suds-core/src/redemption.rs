use rand::Rng;

const CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Synthesize a presentable wash code: the first three characters of the
/// car-wash id, the last six digits of the issue timestamp (epoch millis)
/// and three random base-36 uppercase characters.
///
/// Codes are fixed-shape (3 + 6 + 3) but neither unique nor reproducible;
/// issuing twice for the same payment yields two different codes.
pub fn wash_code<R: Rng>(car_wash_id: &str, issued_at_ms: i64, rng: &mut R) -> String {
    let prefix: String = car_wash_id.chars().take(3).collect();

    let millis = issued_at_ms.to_string();
    let tail_start = millis.len().saturating_sub(6);
    let timestamp_part = &millis[tail_start..];

    let suffix: String = (0..3)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect();

    format!("{}{}{}", prefix, timestamp_part, suffix)
}

/// Issue a code stamped with the current wall clock.
pub fn issue_wash_code(car_wash_id: &str) -> String {
    wash_code(
        car_wash_id,
        chrono::Utc::now().timestamp_millis(),
        &mut rand::thread_rng(),
    )
}
