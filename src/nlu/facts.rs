//! Fact Extractor
//!
//! Regex-based extraction of personal facts from free text into the profile
//! store. Runs on every normal-mode turn regardless of the detected intent,
//! so nothing the user discloses is missed. The extractors are independent,
//! write disjoint keys, and only ever add within a session.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::UserProfile;

static JOB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i\s+work\s+as|my\s+job\s+is|i'm\s+an?|i\s+am\s+an?)\s+([a-zA-Z ]+)")
        .expect("job regex")
});

static SKILL_BEGINNER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i'm|i\s+am)\s+(?:new\s+to\s+this|a\s+beginner|just\s+starting)")
        .expect("beginner regex")
});

static SKILL_ADVANCED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i'm|i\s+am)\s+(?:experienced|an\s+expert|advanced)")
        .expect("advanced regex")
});

static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i'm|i\s+am)\s+(\d{1,2})\s*years?\s*old").expect("age regex")
});

const KNOWN_DEVICES: &[&str] = &[
    "iphone", "android", "laptop", "pc", "mac", "computer", "tablet", "ipad", "windows",
];

const KNOWN_SERVICES: &[&str] = &[
    "facebook", "instagram", "twitter", "linkedin", "gmail", "outlook", "tiktok",
];

const TECH_JOBS: &[&str] = &[
    "developer", "programmer", "engineer", "it", "tech", "computer", "software", "data",
    "cybersecurity",
];

/// Personal-fact extractor. All patterns are compiled once at construction.
pub struct FactExtractor {
    device_rules: Vec<(&'static str, Regex)>,
    service_rules: Vec<(&'static str, Regex)>,
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FactExtractor {
    pub fn new() -> Self {
        let device_rules = KNOWN_DEVICES
            .iter()
            .map(|device| {
                let pattern = format!(r"(?i)\b(?:i\s+use|i\s+have|my)\s+(?:an?\s+)?{device}\b");
                (*device, Regex::new(&pattern).expect("device regex"))
            })
            .collect();
        let service_rules = KNOWN_SERVICES
            .iter()
            .map(|service| {
                let pattern = format!(r"(?i)\b(?:i\s+use|i'm\s+on|i\s+am\s+on)\s+{service}\b");
                (*service, Regex::new(&pattern).expect("service regex"))
            })
            .collect();
        Self {
            device_rules,
            service_rules,
        }
    }

    /// Run every extractor over the input, mutating the profile in place.
    pub fn extract(&self, profile: &mut UserProfile, input: &str) {
        self.extract_job(profile, input);
        self.extract_skill_level(profile, input);
        self.extract_mentions(profile, input, "devices", &self.device_rules);
        self.extract_mentions(profile, input, "services", &self.service_rules);
        self.extract_age(profile, input);
    }

    fn extract_job(&self, profile: &mut UserProfile, input: &str) {
        if let Some(caps) = JOB_RE.captures(input) {
            let job = caps[1].trim().to_string();
            if job.is_empty() {
                return;
            }
            tracing::debug!("Extracted job fact: {}", job);
            if is_tech_job(&job) {
                profile.remember("tech_level", "advanced");
            }
            profile.remember("job", &job);
        }
    }

    fn extract_skill_level(&self, profile: &mut UserProfile, input: &str) {
        if SKILL_BEGINNER_RE.is_match(input) {
            profile.remember("skill_level", "beginner");
        } else if SKILL_ADVANCED_RE.is_match(input) {
            profile.remember("skill_level", "advanced");
        }
    }

    /// Accumulate matched mentions into a space-joined, deduplicated set.
    fn extract_mentions(
        &self,
        profile: &mut UserProfile,
        input: &str,
        key: &str,
        rules: &[(&'static str, Regex)],
    ) {
        for (name, pattern) in rules {
            if pattern.is_match(input) {
                let current = profile.recall(key).unwrap_or("").to_string();
                if !current.split_whitespace().any(|existing| existing == *name) {
                    let updated = format!("{current} {name}").trim().to_string();
                    profile.remember(key, &updated);
                }
            }
        }
    }

    fn extract_age(&self, profile: &mut UserProfile, input: &str) {
        if let Some(caps) = AGE_RE.captures(input) {
            profile.remember("age", &caps[1]);
        }
    }
}

fn is_tech_job(job: &str) -> bool {
    let lowered = job.to_lowercase();
    TECH_JOBS.iter().any(|tech| lowered.contains(tech))
}
