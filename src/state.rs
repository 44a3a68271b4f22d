use std::collections::BTreeMap;

use serde::Serialize;

/// Rendered in the result panel before any prediction has been received.
/// This is a cosmetic placeholder, not a real 0.0% prediction.
pub const DEFAULT_DISPLAY: &str = "0.0%";

/// The user-entered record describing one hypothetical passenger, sent
/// verbatim to the prediction endpoint as a flat JSON object.
///
/// Keys are set independently as their inputs change; an absent key means
/// "unset", never zero. Values travel as raw strings with no coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PassengerAttributes(BTreeMap<String, String>);

impl PassengerAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge of one field: existing keys are untouched, the
    /// written key is overwritten.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Lifecycle of one submission attempt. Exactly one variant holds at a
/// time; transitions are driven solely by submit and its resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Idle,
    Loading,
    /// The `percentage_survival` value as returned, not re-validated.
    Success(String),
    /// Transport and application errors share this variant; only the
    /// message text differs.
    Failed(String),
}

impl Default for RequestOutcome {
    fn default() -> Self {
        Self::Idle
    }
}

impl RequestOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn percentage(&self) -> Option<&str> {
        match self {
            Self::Success(p) => Some(p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The probability text to render: the received value if a prediction
    /// succeeded, otherwise the [`DEFAULT_DISPLAY`] placeholder.
    pub fn display_value(&self) -> &str {
        self.percentage().unwrap_or(DEFAULT_DISPLAY)
    }
}

/// Monotonic counter tagging submissions. A resolution carrying an id
/// that is no longer current is discarded, so a late response cannot
/// overwrite state after a reset or a newer submission.
#[derive(Debug, Default)]
pub struct SubmissionSeq(u64);

impl SubmissionSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission, superseding all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Supersede outstanding submissions without starting a new one.
    pub fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.0 == id
    }
}

/// How the displayed probability is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Favorable,
    Unfavorable,
}

impl Verdict {
    /// Classify a displayed probability. The value is parsed leniently
    /// (longest leading float prefix, so "72.3%" reads as 72.3); 50 or
    /// above is favorable, anything else, including unparseable text,
    /// is unfavorable.
    pub fn of(display: &str) -> Self {
        match leading_float(display) {
            Some(value) if value >= 50.0 => Self::Favorable,
            _ => Self::Unfavorable,
        }
    }
}

/// Parse the longest leading float prefix of `input`, mirroring how the
/// prediction service's percentage strings ("72.3%") are read.
pub fn leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    let mut digits = 0;

    if matches!(b.get(i), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
        digits += 1;
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(b.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while b.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_last_write_wins() {
        let mut passenger = PassengerAttributes::new();
        passenger.set("Pclass", "1");
        passenger.set("Sex", "female");
        passenger.set("Pclass", "3");

        assert_eq!(passenger.get("Pclass"), Some("3"));
        assert_eq!(passenger.get("Sex"), Some("female"));
        assert_eq!(passenger.len(), 2);
    }

    #[test]
    fn test_set_field_order_of_distinct_keys_does_not_matter() {
        let mut a = PassengerAttributes::new();
        a.set("Age", "28");
        a.set("Fare", "32.5");

        let mut b = PassengerAttributes::new();
        b.set("Fare", "32.5");
        b.set("Age", "28");

        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_keys_are_unset_not_zero() {
        let passenger = PassengerAttributes::new();
        assert!(passenger.is_empty());
        assert_eq!(passenger.get("Age"), None);
    }

    #[test]
    fn test_clear_empties_all_fields() {
        let mut passenger = PassengerAttributes::new();
        passenger.set("Embarked", "S");
        passenger.set("SibSp", "1");
        passenger.clear();

        assert!(passenger.is_empty());
        assert_eq!(passenger.get("Embarked"), None);
    }

    #[test]
    fn test_attributes_serialize_as_flat_json_object() {
        let mut passenger = PassengerAttributes::new();
        passenger.set("Pclass", "2");
        passenger.set("Sex", "male");
        passenger.set("Age", "");

        let json = serde_json::to_value(&passenger).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Age": "", "Pclass": "2", "Sex": "male"})
        );
    }

    #[test]
    fn test_outcome_default_is_idle() {
        assert_eq!(RequestOutcome::default(), RequestOutcome::Idle);
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(RequestOutcome::Loading.is_loading());
        assert!(RequestOutcome::Success("50%".into()).is_success());
        assert!(RequestOutcome::Failed("boom".into()).is_failed());
        assert!(!RequestOutcome::Idle.is_loading());
    }

    #[test]
    fn test_display_value_defaults_before_any_submission() {
        assert_eq!(RequestOutcome::Idle.display_value(), "0.0%");
        assert_eq!(RequestOutcome::Loading.display_value(), "0.0%");
        assert_eq!(
            RequestOutcome::Failed("boom".into()).display_value(),
            "0.0%"
        );
    }

    #[test]
    fn test_display_value_uses_received_percentage_verbatim() {
        let outcome = RequestOutcome::Success("72.3%".into());
        assert_eq!(outcome.display_value(), "72.3%");
    }

    #[test]
    fn test_verdict_favorable_at_or_above_fifty() {
        assert_eq!(Verdict::of("72.3%"), Verdict::Favorable);
        assert_eq!(Verdict::of("50"), Verdict::Favorable);
        assert_eq!(Verdict::of("100.0%"), Verdict::Favorable);
    }

    #[test]
    fn test_verdict_unfavorable_below_fifty() {
        assert_eq!(Verdict::of("30%"), Verdict::Unfavorable);
        assert_eq!(Verdict::of("49.999"), Verdict::Unfavorable);
        assert_eq!(Verdict::of("0.0%"), Verdict::Unfavorable);
    }

    #[test]
    fn test_verdict_unparseable_is_unfavorable() {
        assert_eq!(Verdict::of("n/a"), Verdict::Unfavorable);
        assert_eq!(Verdict::of(""), Verdict::Unfavorable);
    }

    #[test]
    fn test_submission_seq_accepts_only_latest_id() {
        let mut seq = SubmissionSeq::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_submission_seq_reset_supersedes_in_flight_id() {
        let mut seq = SubmissionSeq::new();
        let in_flight = seq.begin();
        seq.invalidate();

        // A response arriving for the pre-reset submission is stale
        assert!(!seq.is_current(in_flight));
    }

    #[test]
    fn test_leading_float_prefixes() {
        assert_eq!(leading_float("72.3%"), Some(72.3));
        assert_eq!(leading_float("  30 percent"), Some(30.0));
        assert_eq!(leading_float("-12.5rest"), Some(-12.5));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("1e2x"), Some(100.0));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("%72"), None);
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("."), None);
    }
}
