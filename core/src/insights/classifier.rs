use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BulletCategory {
    Strength,
    Risk,
    Action,
}

/// Classification is a replaceable strategy so the keyword heuristic can be
/// swapped out without touching the dedup/cap logic.
pub trait BulletClassifier {
    fn classify(&self, line: &str) -> BulletCategory;
}

const RISK_PATTERN: &str = r"(?i)\b(risk|risks|risky|concern|concerns|challenge|challenges|threat|threats|weakness|weaknesses|churn|uncertain|uncertainty|competitive pressure|competition|dependency|dependent|unproven|gap|gaps|lacks?|limited|burn)\b";

const ACTION_PATTERN: &str = r"(?i)\b(should|must|recommend|recommends|recommended|consider|next steps?|focus on|prioritize|prioritise|improve|strengthen|hire|expand|validate|explore|invest in|pursue|accelerate)\b";

/// Default keyword-regex classifier. Risk wording wins over action wording;
/// everything else is a strength.
pub struct KeywordClassifier {
    risk_re: Regex,
    action_re: Regex,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        KeywordClassifier {
            risk_re: Regex::new(RISK_PATTERN).unwrap_or_else(|_| Regex::new("^$").unwrap()),
            action_re: Regex::new(ACTION_PATTERN).unwrap_or_else(|_| Regex::new("^$").unwrap()),
        }
    }
}

impl BulletClassifier for KeywordClassifier {
    fn classify(&self, line: &str) -> BulletCategory {
        if self.risk_re.is_match(line) {
            BulletCategory::Risk
        } else if self.action_re.is_match(line) {
            BulletCategory::Action
        } else {
            BulletCategory::Strength
        }
    }
}
