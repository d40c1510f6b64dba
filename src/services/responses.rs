//! Response Selector
//!
//! Maps a resolved topic or fallback condition to response text, modulated
//! by the detected sentiment and personalization hints from the fact store.
//! Variant selection goes through the injected rng so tests can pin a seed
//! and assert exact output.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::intent::Topic;
use crate::models::profile::UserProfile;
use crate::models::sentiment::Sentiment;

const PASSWORD_RESPONSES: &[&str] = &[
    "A strong password is your first line of defense. Aim for at least 16 characters with a mix of uppercase, lowercase, numbers, and symbols like !@#$%.",
    "Avoid using personal information like birthdays, names, or pet's names. This info is often public and easy for attackers to guess.",
    "Passphrases are a modern, highly secure method. A random four-word phrase like 'CorrectHorseBatteryStaple' is extremely hard to crack but easy to remember.",
    "Using a password manager is highly recommended. It generates and stores unique, complex passwords for every site, so you only have to remember one strong master password.",
    "Never write your passwords on a sticky note attached to your monitor or keep them in an unencrypted text file. Treat them like a house key.",
    "Regularly check if your email address has been involved in data breaches using 'Have I Been Pwned'. If so, change the password for that service and any others that shared it.",
];

const TWO_FACTOR_RESPONSES: &[&str] = &[
    "Two-Factor Authentication (2FA) is a critical security layer. It combines something you know (password) with something you have (phone).",
    "Enable 2FA on every important account: email, banking, social media. It's one of the single most effective things you can do to protect your digital life.",
    "Use an authenticator app (like Google Authenticator, Authy) for 2FA instead of SMS texts. SMS can be vulnerable to 'SIM-swapping' attacks.",
    "When you set up 2FA, you'll get backup codes. Print them and store them somewhere safe, like a locked drawer. They are your lifeline if you lose your phone.",
    "A hardware security key (like a YubiKey) is the gold standard for 2FA. It's a physical device that you plug in or tap to approve a login, making it immune to phishing.",
    "Even with 2FA, be cautious of 'MFA fatigue' attacks, where an attacker spams you with login requests hoping you'll accidentally approve one.",
];

const PHISHING_RESPONSES: &[&str] = &[
    "Phishing attacks use fake emails, texts, or websites to trick you into revealing sensitive information. They often impersonate trusted brands like Microsoft, Google, or your bank.",
    "Phishing attacks create a false sense of urgency. They use phrases like 'Your account will be suspended' to make you panic and click without thinking.",
    "Always inspect the sender's email address. Scammers often use addresses that look close to a real one, like 'support@microsft.com'.",
    "Before clicking any link in an email, hover your mouse over it. The actual destination URL will pop up. If it looks suspicious, don't click it.",
    "Be wary of emails with poor grammar or spelling mistakes. Legitimate companies usually have teams that proofread their communications.",
    "'Smishing' is phishing via SMS (text messages), and 'Vishing' is phishing via voice calls. Be suspicious of urgent requests from any channel.",
];

const MALWARE_RESPONSES: &[&str] = &[
    "Malware is short for 'Malicious Software'—an umbrella term for viruses, trojans, ransomware, and spyware.",
    "The best defense against malware is caution. Don't click suspicious links, don't open unexpected attachments, and only download software from official sources.",
    "Keep your operating system and all applications (especially your web browser) updated. Updates contain critical security patches that block malware.",
    "Use a reputable antivirus program and ensure its real-time protection is enabled. It's your digital immune system.",
    "If you suspect malware, disconnect the device from the internet to prevent it from spreading. Then, run a full system scan with your antivirus.",
];

const VPN_RESPONSES: &[&str] = &[
    "A VPN (Virtual Private Network) encrypts your internet traffic, making it unreadable to anyone on your network, including on public Wi-Fi or by your ISP.",
    "A VPN hides your real IP address, which helps protect your privacy and can allow you to access content that might be restricted in your geographical region.",
    "Be very careful with 'free' VPN services. They often have slow speeds, data limits, or in the worst cases, may sell your browsing data to advertisers.",
    "For maximum privacy, choose a paid VPN provider with a strict 'no-logs' policy that has undergone public, third-party security audits.",
    "A VPN does not make you 100% anonymous. It's one powerful tool in a privacy toolkit, but doesn't protect you from malware or if you voluntarily give your data to a website like Facebook.",
    "Using a VPN can sometimes slow your connection, as data travels through an extra server. Reputable providers minimize this speed loss.",
];

const WIFI_RESPONSES: &[&str] = &[
    "When setting up home Wi-Fi, always change the default administrator username and password for the router's settings page.",
    "Your Wi-Fi network should be protected with a strong, unique password using WPA3 or at least WPA2 encryption.",
    "Using a 'Guest Network' on your home router is great practice. It provides internet for visitors on an isolated network, so they can't access your personal devices or files.",
    "Be extremely careful on public Wi-Fi (cafes, airports). An attacker on the same network can 'sniff' your traffic. Always use a VPN on public networks.",
    "Your router's firmware should be kept up to date. Manufacturers release patches for security holes. Check your router manufacturer's website for updates.",
];

const DATA_BREACH_RESPONSES: &[&str] = &[
    "A data breach is an incident where sensitive information is stolen or released from a company's database by an unauthorized individual.",
    "The stolen data often includes usernames, email addresses, and passwords, which criminals then sell on the dark web or use for identity theft.",
    "The best defense against the impact of a breach is to use unique passwords for every service. That way, a breach at one company doesn't compromise your accounts elsewhere.",
    "You can check if your email account has been compromised in known data breaches using the free service 'Have I Been Pwned'.",
    "If you find out you've been part of a breach, immediately change the password for that service and enable 2FA if you haven't already.",
];

const ENCRYPTION_RESPONSES: &[&str] = &[
    "Encryption is the process of scrambling data into a code (ciphertext) to prevent unauthorized access. Only someone with the correct key can unscramble it.",
    "End-to-end encryption (E2EE), used by apps like Signal and WhatsApp, ensures that only you and the recipient can read what is sent. No one in between, not even the company, can access it.",
    "Full-disk encryption, like BitLocker on Windows and FileVault on macOS, encrypts your entire hard drive. If your laptop is stolen, the thief can't access your files without your password.",
    "HTTPS is encryption 'in transit', protecting your data as it travels across the internet from your browser to a website.",
    "Encryption is a fundamental building block of digital security, protecting everything from online banking to private messages.",
];

const FALLBACK_RESPONSES: &[&str] = &[
    "I'm not quite sure about that. Could you rephrase or ask about another cybersecurity topic?",
    "That's a bit outside my current knowledge base. I'm great with topics like passwords, malware, and VPNs though!",
];

/// Selects canned response text through the injected rng.
pub struct ResponseSelector;

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self
    }

    /// One response variant for a topic.
    pub fn topic_response(&self, topic: Topic, rng: &mut impl Rng) -> &'static str {
        let bank: &[&str] = match topic {
            Topic::Password => PASSWORD_RESPONSES,
            Topic::TwoFactorAuth => TWO_FACTOR_RESPONSES,
            Topic::Phishing => PHISHING_RESPONSES,
            Topic::Malware => MALWARE_RESPONSES,
            Topic::Vpn => VPN_RESPONSES,
            Topic::WifiSecurity => WIFI_RESPONSES,
            Topic::DataBreach => DATA_BREACH_RESPONSES,
            Topic::Encryption => ENCRYPTION_RESPONSES,
        };
        bank.choose(rng).copied().unwrap_or(bank[0])
    }

    /// Fallback response, personalized with a previously-seen interest when
    /// one exists.
    pub fn fallback_response(&self, profile: &UserProfile, rng: &mut impl Rng) -> String {
        let base = FALLBACK_RESPONSES
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_RESPONSES[0]);
        match profile.interests.as_slice().choose(rng) {
            Some(interest) => {
                format!("{base} We could also dig into {interest} again if you like.")
            }
            None => base.to_string(),
        }
    }

    /// Personalized introductory phrase based on stored facts and the topic.
    pub fn personalization(
        &self,
        profile: &UserProfile,
        topic: Topic,
        rng: &mut impl Rng,
    ) -> Option<String> {
        let mut candidates: Vec<String> = Vec::new();
        let skill = profile.recall("skill_level");
        let tech = profile.recall("tech_level");

        if skill == Some("beginner") {
            candidates
                .push("Since you mentioned you're new to this, let me break it down simply:".to_string());
        } else if skill == Some("advanced") || tech == Some("advanced") {
            candidates.push(format!(
                "Given your tech background, here's a more detailed perspective on {}:",
                topic.as_str().to_lowercase()
            ));
        }

        if let Some(devices) = profile.recall("devices") {
            if topic == Topic::TwoFactorAuth {
                if devices.contains("iphone") {
                    candidates.push(
                        "For your iPhone, setting this up in your Apple ID settings is a great start."
                            .to_string(),
                    );
                }
                if devices.contains("android") {
                    candidates.push(
                        "On your Android, securing your Google account with this is crucial."
                            .to_string(),
                    );
                }
            }
        }

        candidates.choose(rng).cloned()
    }

    /// Short empathy prefix keyed on the detected sentiment.
    pub fn empathy_prefix(&self, sentiment: Sentiment) -> Option<&'static str> {
        match sentiment {
            Sentiment::Worried => Some("No need to worry, we can sort this out together."),
            Sentiment::Frustrated => Some("I hear you, this stuff can be frustrating."),
            Sentiment::Overwhelmed => Some("Let's keep it simple and take one thing at a time."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let selector = ResponseSelector::new();
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(
            selector.topic_response(Topic::Phishing, &mut a),
            selector.topic_response(Topic::Phishing, &mut b)
        );
    }

    #[test]
    fn test_fallback_mentions_interest_when_present() {
        let selector = ResponseSelector::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut profile = UserProfile::new();
        profile.add_interest("vpn");
        let reply = selector.fallback_response(&profile, &mut rng);
        assert!(reply.contains("vpn"));
    }

    #[test]
    fn test_fallback_without_interests_is_plain() {
        let selector = ResponseSelector::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let profile = UserProfile::new();
        let reply = selector.fallback_response(&profile, &mut rng);
        assert!(FALLBACK_RESPONSES.contains(&reply.as_str()));
    }

    #[test]
    fn test_beginner_personalization() {
        let selector = ResponseSelector::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut profile = UserProfile::new();
        profile.remember("skill_level", "beginner");
        let prefix = selector
            .personalization(&profile, Topic::Password, &mut rng)
            .unwrap();
        assert!(prefix.contains("new to this"));
    }

    #[test]
    fn test_device_hint_only_for_two_factor_topic() {
        let selector = ResponseSelector::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut profile = UserProfile::new();
        profile.remember("devices", "iphone");

        assert!(selector
            .personalization(&profile, Topic::Password, &mut rng)
            .is_none());
        let hint = selector
            .personalization(&profile, Topic::TwoFactorAuth, &mut rng)
            .unwrap();
        assert!(hint.contains("iPhone"));
    }

    #[test]
    fn test_empathy_prefix_only_for_negative_moods() {
        let selector = ResponseSelector::new();
        assert!(selector.empathy_prefix(Sentiment::Worried).is_some());
        assert!(selector.empathy_prefix(Sentiment::Neutral).is_none());
        assert!(selector.empathy_prefix(Sentiment::Happy).is_none());
    }
}
