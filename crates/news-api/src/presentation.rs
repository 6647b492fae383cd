//! Presentation Rules
//!
//! Pure mappings from item fields to display buckets.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Minimum-impact selector options, aligned with the badge bands
pub const IMPACT_THRESHOLDS: &[(u32, &str)] = &[
    (0, "Any impact"),
    (40, "40+"),
    (60, "60+"),
    (80, "80+"),
];

/// Severity band of an impact score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactBand {
    High,
    Elevated,
    Moderate,
    Low,
}

impl ImpactBand {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => ImpactBand::High,
            s if s >= 60 => ImpactBand::Elevated,
            s if s >= 40 => ImpactBand::Moderate,
            _ => ImpactBand::Low,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ImpactBand::High => "impact-high",
            ImpactBand::Elevated => "impact-elevated",
            ImpactBand::Moderate => "impact-moderate",
            ImpactBand::Low => "impact-low",
        }
    }
}

/// Bucket of a free-text sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Positive,
    Negative,
    Neutral,
}

impl SentimentTone {
    /// Case-insensitive substring match; anything else is neutral
    pub fn from_label(label: Option<&str>) -> Self {
        let lowered = label.unwrap_or_default().to_lowercase();
        if lowered.contains("positive") {
            SentimentTone::Positive
        } else if lowered.contains("negative") {
            SentimentTone::Negative
        } else {
            SentimentTone::Neutral
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SentimentTone::Positive => "sentiment-positive",
            SentimentTone::Negative => "sentiment-negative",
            SentimentTone::Neutral => "sentiment-neutral",
        }
    }
}

/// Palette slot of a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTone {
    Research,
    Product,
    Business,
    Policy,
    General,
}

impl CategoryTone {
    /// Exact match on the known labels; unknown labels share the general slot
    pub fn from_label(label: &str) -> Self {
        match label {
            "Research" => CategoryTone::Research,
            "Product" => CategoryTone::Product,
            "Business" => CategoryTone::Business,
            "Policy" => CategoryTone::Policy,
            _ => CategoryTone::General,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CategoryTone::Research => "category-research",
            CategoryTone::Product => "category-product",
            CategoryTone::Business => "category-business",
            CategoryTone::Policy => "category-policy",
            CategoryTone::General => "category-general",
        }
    }
}

/// RFC 3339, or a naive ISO timestamp taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// "3 hours ago" style distance from `now`
pub fn relative_time(published: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = published.and_then(parse_timestamp) else {
        return "Unknown date".to_string();
    };

    let seconds = (now - then).num_seconds();
    let phrase = distance_phrase(seconds.unsigned_abs());
    if seconds >= 0 {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

fn distance_phrase(seconds: u64) -> String {
    const HOUR: f64 = 60.0;
    const DAY: f64 = 1440.0;
    const MONTH: f64 = 43200.0;
    const YEAR: u64 = 525600;

    let minutes_f = seconds as f64 / 60.0;
    let minutes = minutes_f.round() as u64;

    if seconds < 30 {
        "less than a minute".to_string()
    } else if minutes <= 1 {
        "1 minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < 1440 {
        format!("about {} hours", (minutes_f / HOUR).round() as u64)
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < 43200 {
        format!("{} days", (minutes_f / DAY).round() as u64)
    } else if minutes < 86400 {
        "about 1 month".to_string()
    } else if minutes < YEAR {
        format!("{} months", (minutes_f / MONTH).round() as u64)
    } else {
        match minutes / YEAR {
            1 => "about 1 year".to_string(),
            years => format!("about {} years", years),
        }
    }
}

/// Whole numbers print bare, fractions keep two decimals
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
