use serde::{Deserialize, Deserializer};

/// تابعی برای دی‌سریال‌سازی که در صورت بروز خطا، مقدار پیش‌فرض را برمی‌گرداند
pub fn ok_or_default<'a, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'a> + Default,
    D: Deserializer<'a>,
{
    let v: serde_json::Value = Deserialize::deserialize(deserializer)?;
    Ok(T::deserialize(v).unwrap_or_default())
}

/// جستجوی زیررشته بدون حساسیت به بزرگی و کوچکی حروف
///
/// `needle` باید از قبل به حروف کوچک تبدیل شده باشد.
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "ok_or_default", default)]
        count: u32,
    }

    #[test]
    fn malformed_field_falls_back_to_default() {
        let probe: Probe = serde_json::from_str(r#"{ "count": "many" }"#).unwrap();
        assert_eq!(probe.count, 0);

        let probe: Probe = serde_json::from_str(r#"{ "count": 7 }"#).unwrap();
        assert_eq!(probe.count, 7);
    }

    #[test]
    fn matches_regardless_of_case() {
        assert!(contains_lowercase("Cloud Accounts", "cloud"));
        assert!(contains_lowercase("CLOUD", "clo"));
        assert!(contains_lowercase("anything", ""));
        assert!(!contains_lowercase("Workload Alerts", "cloud"));
    }
}
