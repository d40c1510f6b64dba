//! Intent Classifier
//!
//! Turns one line of free text into a structured [`Intent`] using a
//! prioritized, ordered rule table:
//! - A task/reminder pre-pass runs before everything else, because task
//!   phrasing overlaps heavily with the generic keyword patterns.
//! - Control intents (list/quiz/log/memory/help) are tested before the
//!   information and smalltalk intents.
//! - Within a band, first matching rule wins. No scoring, no backtracking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::intent::{Intent, IntentKind, Topic};

/// Trigger words that route input into the task pre-pass.
static TASK_TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:task|reminder|remind|to-?dos?)\b").expect("task trigger regex"));

/// Date/time phrase inside a task utterance, e.g. "tomorrow at 5pm",
/// "in 3 days", "on friday", "at 10:30am".
static TIME_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:(?:on|at|in|by)\s+)?
        (?:
            (?:today|tonight|tomorrow|in\s+\d+\s+days?|(?:next\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday))
            (?:\s+at\s+(?:noon|midnight|\d{1,2}(?::\d{2})?\s*(?:am|pm)?))?
          | noon|midnight
          | \d{1,2}(?::\d{2})?\s*(?:am|pm)
        )\b",
    )
    .expect("time phrase regex")
});

/// Boilerplate lead-ins stripped from the front of a task utterance.
/// Longer variants must come before their shorter stems.
const TASK_LEAD_INS: &[&str] = &[
    "remind me to",
    "remind me about",
    "remind me",
    "set a reminder for me to",
    "set a reminder for",
    "set a reminder to",
    "set a reminder",
    "add a task to",
    "add a task for",
    "add a task",
    "add task",
    "add a to-do to",
    "add a to-do",
    "add to-do",
    "create a task to",
    "create a task for",
    "create a task",
    "new task",
    "i need a reminder to",
    "i have a task to",
];

/// One entry of the ordered rule table.
struct IntentRule {
    kind: IntentKind,
    topic: Option<Topic>,
    pattern: Regex,
}

impl IntentRule {
    fn new(kind: IntentKind, pattern: &str) -> Self {
        Self {
            kind,
            topic: None,
            pattern: Regex::new(pattern).expect("intent rule regex"),
        }
    }

    fn topic(topic: Topic, pattern: &str) -> Self {
        Self {
            kind: IntentKind::GetInfo,
            topic: Some(topic),
            pattern: Regex::new(pattern).expect("topic rule regex"),
        }
    }
}

/// Rule-table intent classifier. Deterministic and stateless: classifying
/// the same input twice always yields the same [`Intent`].
pub struct IntentClassifier {
    control_rules: Vec<IntentRule>,
    general_rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            control_rules: build_control_rules(),
            general_rules: build_general_rules(),
        }
    }

    /// Classify one line of user input.
    ///
    /// The caller filters empty/whitespace-only input; entity values keep
    /// the original casing of the matched span.
    pub fn classify(&self, input: &str) -> Intent {
        let text = input.trim();
        let lowered = text.to_lowercase();

        // Task pre-pass takes absolute priority over every other rule.
        if TASK_TRIGGER.is_match(text) {
            if let Some(intent) = extract_task_intent(text) {
                return intent;
            }
        }

        for rule in self.control_rules.iter().chain(self.general_rules.iter()) {
            // An interrogative is a question about stored info, not a
            // disclosure of new info.
            if rule.kind == IntentKind::AcknowledgeInfo && lowered.starts_with("what") {
                continue;
            }
            if rule.pattern.is_match(text) {
                return match rule.topic {
                    Some(topic) => Intent::get_info(topic),
                    None => Intent::of(rule.kind),
                };
            }
        }

        Intent::of(IntentKind::Fallback)
    }
}

/// Extract a `CreateTask` intent from a task-flavored utterance.
///
/// Pulls out the time phrase (if any), strips the boilerplate lead-in, and
/// treats the non-empty residual as the task title. Returns `None` when the
/// utterance carries no creation lead-in or no title survives, so phrasings
/// like "show my tasks" fall through to the ordinary rule bands.
fn extract_task_intent(text: &str) -> Option<Intent> {
    let (remainder, time) = match TIME_PHRASE.find(text) {
        Some(m) => {
            let mut rest = String::with_capacity(text.len());
            rest.push_str(&text[..m.start()]);
            rest.push(' ');
            rest.push_str(&text[m.end()..]);
            (rest, Some(m.as_str().trim().to_string()))
        }
        None => (text.to_string(), None),
    };

    let title = strip_task_boilerplate(&remainder)?;
    if title.is_empty() {
        return None;
    }

    let mut intent = Intent::of(IntentKind::CreateTask).with_entity("task", &title);
    if let Some(time) = time {
        intent = intent.with_entity("time", &time);
    }
    Some(intent)
}

/// Remove the leading boilerplate phrase and dangling connective tokens from
/// the remainder of a task utterance. Returns `None` when the utterance does
/// not start with a creation lead-in.
fn strip_task_boilerplate(remainder: &str) -> Option<String> {
    let mut rest = remainder.trim();
    let lowered = rest.to_lowercase();

    let mut lead_found = false;
    for lead in TASK_LEAD_INS {
        if lowered.starts_with(lead) {
            let boundary_ok = lowered.len() == lead.len()
                || lowered.as_bytes()[lead.len()].is_ascii_whitespace();
            if boundary_ok {
                rest = rest[lead.len()..].trim_start();
                lead_found = true;
                break;
            }
        }
    }
    if !lead_found {
        return None;
    }

    let mut words: Vec<&str> = rest.split_whitespace().collect();
    while matches!(
        words.last().map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation())),
        Some("on") | Some("at") | Some("in") | Some("by") | Some("for")
    ) {
        words.pop();
    }
    while matches!(
        words.first().map(|w| w.to_lowercase()).as_deref(),
        Some("to") | Some("about")
    ) {
        words.remove(0);
    }

    Some(
        words
            .join(" ")
            .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
            .to_string(),
    )
}

/// Band (a): control intents, tested before everything else in declaration
/// order. Ambiguity between control intents resolves to the earliest rule.
fn build_control_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(
            IntentKind::ListTasks,
            r"(?i)\b(?:show|list|see|view|what are|check)\s+(?:my\s+)?(?:tasks|reminders|to-?dos)\b",
        ),
        IntentRule::new(
            IntentKind::StartQuiz,
            r"(?i)\b(?:(?:start|take|begin|do|launch)\s+(?:a\s+|the\s+)?quiz|test\s+my\s+knowledge|give\s+me\s+a\s+quiz)\b",
        ),
        IntentRule::new(
            IntentKind::StopQuiz,
            r"(?i)\b(?:stop|end|quit|exit)\s+(?:the\s+)?quiz\b",
        ),
        IntentRule::new(
            IntentKind::ViewLog,
            r"(?i)\b(?:show|view)\s+(?:my\s+)?(?:activity|log|history)\b",
        ),
        // Bare "more"/"next" only as the whole utterance, so that
        // "tell me more about phishing" still reaches the topic rules.
        IntentRule::new(
            IntentKind::ViewMoreLog,
            r"(?i)(?:\b(?:show\s+more|next\s+page)\b|^\s*(?:more|next)\s*[.!]?\s*$)",
        ),
        IntentRule::new(
            IntentKind::RecallMemory,
            r"(?i)\b(?:what\s+do\s+you\s+(?:know|remember)\s+about\s+me|what\s+have\s+i\s+told\s+you|(?:recall|show)\s+(?:my\s+)?memory)\b",
        ),
        IntentRule::new(
            IntentKind::Help,
            r"(?i)\b(?:help|options|commands|what\s+can\s+you\s+do)\b",
        ),
    ]
}

/// Band (b): topic rules, then the smalltalk catch-alls.
fn build_general_rules() -> Vec<IntentRule> {
    let mut rules = Vec::new();

    add_topic_rules(
        &mut rules,
        Topic::Password,
        &["password", "passcode", "pass phrase", "credential"],
        &[
            r"(?i)how\s+(?:strong|good|secure)\s+is\s+my\s+password",
            r"(?i)password\s+(?:safety|security|hygiene|best\s+practices)",
            r"(?i)create\s+a\s+strong\s+password",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::TwoFactorAuth,
        &["2fa", "two factor", "mfa", "multi-factor", "authenticator", "verification code", "otp"],
        &[
            r"(?i)should\s+i\s+use\s+2fa",
            r"(?i)what\s+is\s+an\s+authenticator\s+app",
            r"(?i)is\s+sms\s+2fa\s+safe",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::Phishing,
        &["phishing", "phish", "fake email", "smishing", "vishing"],
        &[
            r"(?i)how\s+to\s+spot\s+a\s+phishing\s+email",
            r"(?i)i\s+got\s+a\s+weird\s+(?:email|text)",
            r"(?i)report\s+phishing",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::Malware,
        &["malware", "virus", "spyware", "ransomware", "trojan", "antivirus"],
        &[
            r"(?i)how\s+to\s+remove\s+a\s+virus",
            r"(?i)my\s+computer\s+is\s+acting\s+weird",
            r"(?i)do\s+i\s+need\s+antivirus",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::Vpn,
        &["vpn", "virtual private network"],
        &[
            r"(?i)should\s+i\s+use\s+a\s+vpn",
            r"(?i)how\s+does\s+a\s+vpn\s+work",
            r"(?i)is\s+a\s+free\s+vpn\s+safe",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::WifiSecurity,
        &["wifi", "wi-fi", "public wifi", "hotspot", "wpa2", "wpa3"],
        &[
            r"(?i)is\s+public\s+wifi\s+safe",
            r"(?i)secure\s+my\s+home\s+network",
            r"(?i)airport\s+wifi\s+security",
        ],
    );
    add_topic_rules(
        &mut rules,
        Topic::DataBreach,
        &["data breach", "hacked", "leaked", "compromised", "have i been pwned"],
        &[],
    );
    add_topic_rules(
        &mut rules,
        Topic::Encryption,
        &["encryption", "encrypt", "end-to-end", "e2ee", "bitlocker"],
        &[],
    );

    rules.push(IntentRule::new(
        IntentKind::AcknowledgeInfo,
        r"(?i)\b(?:i\s+work\s+as|my\s+job\s+is|i\s+am|i'm|i\s+use|i\s+have|i'm\s+on)\b",
    ));
    rules.push(IntentRule::new(
        IntentKind::Greeting,
        r"(?i)\b(?:hi|hello|hey|yo|howdy|good\s+morning|good\s+afternoon)\b",
    ));
    rules.push(IntentRule::new(
        IntentKind::ThankYou,
        r"(?i)\b(?:thanks|thank\s+you|thx|cheers|appreciated)\b",
    ));
    rules.push(IntentRule::new(
        IntentKind::Confirm,
        r"(?i)\b(?:yes|yeah|yep|sure|ok|okay|please\s+do|go\s+ahead|sounds\s+good)\b",
    ));
    rules.push(IntentRule::new(
        IntentKind::Deny,
        r"(?i)\b(?:no|nope|nah|not\s+now|don'?t|do\s+not|never\s*mind|cancel)\b",
    ));

    rules
}

/// Synthesize the rules for one topic: hand-written phrase patterns first,
/// then the conversational frame, then the bare keyword match. Conversational
/// phrasing wins over a bare mention because it is declared first.
fn add_topic_rules(rules: &mut Vec<IntentRule>, topic: Topic, keywords: &[&str], phrases: &[&str]) {
    for phrase in phrases {
        rules.push(IntentRule::topic(topic, phrase));
    }

    let keyword_alt = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    rules.push(IntentRule::topic(
        topic,
        &format!(
            r"(?i)(?:what\s+is|what\s+are|tell\s+me\s+about|how\s+do\s+i|explain|info\s+on)\s+.*?(?:{keyword_alt})"
        ),
    ));
    rules.push(IntentRule::topic(
        topic,
        &format!(r"(?i)\b(?:{keyword_alt})s?\b"),
    ));
}
