//! 测验题目数据模型
//!
//! 固定题库，题目创建后不可变。

use serde::{Deserialize, Serialize};

/// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 题干
    pub text: String,
    /// 选项（有序）
    pub options: Vec<String>,
    /// 正确选项下标（从 0 开始）
    pub correct_index: usize,
    /// 答案解析
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(text: &str, options: &[&str], correct_index: usize, explanation: &str) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: explanation.to_string(),
        }
    }
}

/// 内置题库
pub fn question_bank() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What is the most important factor for a strong password?",
            &["Length", "Complexity (using !@#$)", "Using your pet's name"],
            0,
            "Length is the single most important factor. A long passphrase is much harder to crack than a short, complex one.",
        ),
        QuizQuestion::new(
            "A 'password manager' is a type of malware.",
            &["True", "False"],
            1,
            "False. A password manager is a secure tool that helps you create and store unique, strong passwords for all your accounts.",
        ),
        QuizQuestion::new(
            "Which method of 2FA is generally considered the most secure?",
            &["SMS (text message)", "Authenticator App", "Hardware Security Key"],
            2,
            "Hardware keys are the gold standard as they are immune to phishing. Authenticator apps are a strong second choice.",
        ),
        QuizQuestion::new(
            "What is 'Biometric' authentication?",
            &[
                "Using your location to log in",
                "Using a physical characteristic like a fingerprint or face",
                "Using a password you've memorized",
            ],
            1,
            "Biometrics use something you 'are' (like a fingerprint) to verify your identity. It's often used to unlock phones and laptops.",
        ),
        QuizQuestion::new(
            "What type of malware disguises itself as a legitimate program?",
            &["Virus", "Worm", "Trojan"],
            2,
            "A Trojan Horse tricks you into installing it by pretending to be a useful piece of software, like a game or utility.",
        ),
        QuizQuestion::new(
            "Ransomware's primary goal is to:",
            &[
                "Steal your passwords",
                "Encrypt your files and demand payment",
                "Slow down your computer",
            ],
            1,
            "Ransomware holds your data hostage by encrypting it and demands a ransom for its release.",
        ),
        QuizQuestion::new(
            "The best defense against ransomware is:",
            &["A strong firewall", "Regular, offline backups", "A fast internet connection"],
            1,
            "If you have backups, you can restore your files without paying the ransom, rendering the attack useless.",
        ),
        QuizQuestion::new(
            "A 'keylogger' is a type of spyware that records your...",
            &["Screen", "Keystrokes", "Webcam"],
            1,
            "Keyloggers capture everything you type, including passwords and private messages, making them extremely dangerous.",
        ),
        QuizQuestion::new(
            "A 'zero-day' vulnerability is:",
            &[
                "A security flaw with zero impact",
                "A flaw exploited by hackers before the developer has a patch for it",
                "A flaw found on the first day a program is released",
            ],
            1,
            "It's called a 'zero-day' because the developers have had zero days to fix it, making it extremely dangerous.",
        ),
        QuizQuestion::new(
            "You receive an email from your bank asking you to click a link to verify your account. What should you do?",
            &[
                "Click the link and log in",
                "Ignore the email",
                "Open your browser and manually type your bank's website address to log in",
            ],
            2,
            "Never click links in unexpected emails. Go directly to the official website to verify any account issues.",
        ),
        QuizQuestion::new(
            "'Smishing' is a type of phishing attack conducted via:",
            &["Email", "Phone Call", "SMS (Text Message)"],
            2,
            "Smishing combines 'SMS' and 'phishing'. It's a very common way for scammers to send malicious links.",
        ),
        QuizQuestion::new(
            "A phishing email will often create a sense of...",
            &["Calm and patience", "Urgency and fear", "Curiosity and excitement"],
            1,
            "Scammers want you to panic and act without thinking, so they use urgent language like 'account suspended' or 'act now'.",
        ),
        QuizQuestion::new(
            "What is 'social engineering'?",
            &[
                "A type of coding language",
                "Manipulating people to give up confidential information",
                "A social media marketing technique",
            ],
            1,
            "Social engineering is the art of psychological manipulation. Phishing is a common form of it.",
        ),
        QuizQuestion::new(
            "An attacker calls you pretending to be from tech support and asks for remote access to your computer. This is an example of:",
            &["Vishing", "A Denial-of-Service attack", "Ransomware"],
            0,
            "Vishing (Voice Phishing) uses phone calls to trick people into giving up access or information.",
        ),
        QuizQuestion::new(
            "A VPN (Virtual Private Network) will:",
            &[
                "Make your internet faster",
                "Encrypt your internet traffic",
                "Block all viruses",
            ],
            1,
            "A VPN's main purpose is to create a secure, encrypted tunnel for your data, protecting your privacy from eavesdroppers.",
        ),
        QuizQuestion::new(
            "Is it safe to do online banking on public Wi-Fi without a VPN?",
            &[
                "Yes, if the website is HTTPS",
                "No, it's never safe",
                "Only if the Wi-Fi has a password",
            ],
            1,
            "No. An attacker on the same network can intercept your data. Always use a VPN on public networks for sensitive tasks.",
        ),
        QuizQuestion::new(
            "What does a firewall primarily do?",
            &[
                "Scans for viruses",
                "Monitors and filters network traffic",
                "Backs up your files",
            ],
            1,
            "A firewall acts as a barrier, controlling what traffic is allowed into or out of your network based on security rules.",
        ),
        QuizQuestion::new(
            "The padlock icon in your browser's address bar signifies what?",
            &[
                "The website is safe from malware",
                "The website is owned by a trusted company",
                "Your connection to the website is encrypted (HTTPS)",
            ],
            2,
            "The padlock means your connection is encrypted, preventing eavesdropping. It does not guarantee the site itself is trustworthy.",
        ),
        QuizQuestion::new(
            "The most secure Wi-Fi encryption standard is:",
            &["WEP", "WPA2", "WPA3"],
            2,
            "WPA3 is the latest and most secure standard. WEP is ancient and completely insecure.",
        ),
        QuizQuestion::new(
            "Keeping your software updated is a critical security practice.",
            &["True", "False"],
            0,
            "Updates often contain patches for security vulnerabilities that attackers can exploit. It's one of the easiest and most important security habits.",
        ),
        QuizQuestion::new(
            "You find a USB stick on the ground. What should you do?",
            &[
                "Plug it into your computer to find the owner",
                "Plug it into an isolated, non-critical computer",
                "Destroy it or turn it in to a lost and found without plugging it in",
            ],
            2,
            "Never plug in unknown USB drives. They can be loaded with malware designed to automatically infect any computer they're connected to.",
        ),
        QuizQuestion::new(
            "What is the 'Principle of Least Privilege'?",
            &[
                "Giving a user the minimum levels of access needed to perform their job functions",
                "Always using the least expensive security software",
                "Privileging security over user convenience",
            ],
            0,
            "This principle limits the damage that can result from a compromised account. A user with fewer permissions can do less harm.",
        ),
        QuizQuestion::new(
            "What is a 'data breach'?",
            &[
                "A type of network cable",
                "An intentional system shutdown",
                "An incident where sensitive information is stolen or released",
            ],
            2,
            "In a data breach, confidential data like usernames, passwords, and credit card numbers are exposed to unauthorized individuals.",
        ),
        QuizQuestion::new(
            "You can check if your email has been exposed in a known data breach using which website?",
            &["CanIBeHacked.com", "HaveIBeenPwned.com", "IsMyDataSafe.org"],
            1,
            "HaveIBeenPwned.com is a reputable, free service that aggregates data from hundreds of breaches, allowing you to check your exposure.",
        ),
        QuizQuestion::new(
            "What does 'end-to-end encryption' (E2EE) mean?",
            &[
                "The data is encrypted only on the sender's device",
                "The data is encrypted on the server",
                "Only the sender and intended recipient can read the message",
            ],
            2,
            "E2EE ensures that no one in between, not even the company providing the service, can decipher the messages.",
        ),
        QuizQuestion::new(
            "Is it safe to share your password with a close friend or family member?",
            &["Yes, if you trust them", "No, passwords should never be shared"],
            1,
            "Passwords should be treated like toothbrushes: never share them. If someone needs access, use features like guest accounts or family sharing plans.",
        ),
        QuizQuestion::new(
            "What is 'Adware'?",
            &[
                "Software that helps you make advertisements",
                "Software that automatically displays or downloads unwanted advertising material",
                "A hardware device for blocking ads",
            ],
            1,
            "Adware is a type of malware that bombards you with pop-ups and ads, often tracks your browsing habits, and can slow down your computer.",
        ),
        QuizQuestion::new(
            "If you receive a 'friend request' from someone you don't know on social media, you should:",
            &[
                "Accept it to be friendly",
                "Ignore or delete the request",
                "Accept it, but restrict their access",
            ],
            1,
            "Accepting requests from strangers can expose your personal information to scammers or fake accounts. It's safest to only connect with people you know.",
        ),
        QuizQuestion::new(
            "The term 'digital footprint' refers to:",
            &[
                "The size of your hard drive",
                "The trail of data you leave behind when you use the internet",
                "The number of devices you own",
            ],
            1,
            "Your digital footprint includes social media posts, browsing history, and online purchases. It's important to be mindful of what you share.",
        ),
        QuizQuestion::new(
            "A 'Denial-of-Service' (DoS) attack aims to:",
            &[
                "Steal data from a server",
                "Make a website or service unavailable to legitimate users",
                "Delete a user's account",
            ],
            1,
            "A DoS attack floods a server with so much traffic that it becomes overwhelmed and cannot respond to normal requests.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_has_thirty_questions() {
        assert_eq!(question_bank().len(), 30);
    }

    #[test]
    fn test_every_correct_index_is_in_range() {
        for question in question_bank() {
            assert!(
                question.correct_index < question.options.len(),
                "bad correct_index for question: {}",
                question.text
            );
            assert!(!question.explanation.is_empty());
        }
    }
}
