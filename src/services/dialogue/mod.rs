//! Dialogue Engine
//!
//! The per-session state machine. Each turn is consumed by exactly one of
//! three modes: an active quiz, a pending reminder confirmation, or normal
//! intent routing. The engine owns the session's profile, tasks, activity
//! log, and randomness source; it performs no I/O of its own.

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use once_cell::sync::Lazy;

use crate::config::EngineConfig;
use crate::models::activity::ActivityCategory;
use crate::models::intent::{Intent, IntentKind, Topic};
use crate::models::profile::UserProfile;
use crate::models::quiz::question_bank;
use crate::models::sentiment::Sentiment;
use crate::models::task::Task;
use crate::nlu::classifier::IntentClassifier;
use crate::nlu::datetime::parse_natural;
use crate::nlu::facts::FactExtractor;
use crate::nlu::sentiment::SentimentAnalyzer;
use crate::services::activity_log::{page_entries, total_pages, ActivityLog};
use crate::services::quiz::{AnswerResult, QuizSession};
use crate::services::responses::ResponseSelector;

/// Name-capture overlay, checked on every normal-mode turn.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:my\s+name\s+is|call\s+me|i\s+am)\s+([A-Za-z]+)").expect("name regex")
});

/// 对话模式
///
/// 三种模式互斥，决定下一轮输入由谁消费。
#[derive(Debug)]
pub enum Mode {
    /// 普通意图路由
    Normal,
    /// 测验进行中
    QuizActive(QuizSession),
    /// 等待用户确认提醒时间（任务尚未提交）
    AwaitingReminderTime(Task),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::QuizActive(_) => "quiz",
            Mode::AwaitingReminderTime(_) => "awaiting_reminder",
        }
    }
}

/// One turn's output: the reply text plus a presentation sentiment tag.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: String,
    pub sentiment: Sentiment,
}

impl TurnOutcome {
    fn new(reply: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            reply: reply.into(),
            sentiment,
        }
    }
}

/// Per-session dialogue engine.
pub struct DialogueEngine {
    profile: UserProfile,
    log: ActivityLog,
    mode: Mode,
    log_page: Option<usize>,
    turns_processed: u64,
    classifier: IntentClassifier,
    facts: FactExtractor,
    sentiment: SentimentAnalyzer,
    responses: ResponseSelector,
    rng: ChaCha8Rng,
    config: EngineConfig,
}

impl DialogueEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.response_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut log = ActivityLog::new();
        log.log(ActivityCategory::System, "New session started.");
        Self {
            profile: UserProfile::new(),
            log,
            mode: Mode::Normal,
            log_page: None,
            turns_processed: 0,
            classifier: IntentClassifier::new(),
            facts: FactExtractor::new(),
            sentiment: SentimentAnalyzer::new(),
            responses: ResponseSelector::new(),
            rng,
            config,
        }
    }

    /// The greeting shown when a session opens.
    pub fn welcome_message() -> &'static str {
        "🛡️ Welcome! I'm your personal security mentor.\nFirst, what should I call you? (e.g., 'my name is Alex')"
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    pub fn turns_processed(&self) -> u64 {
        self.turns_processed
    }

    pub fn log_page_size(&self) -> usize {
        self.config.log_page_size
    }

    /// Process one turn of user input.
    ///
    /// Empty input is filtered here so it never reaches the classifier.
    pub fn process_turn(&mut self, input: &str) -> TurnOutcome {
        let input = input.trim();
        if input.is_empty() {
            return TurnOutcome::new(
                "I didn't catch that. Type 'help' to see what I can do.",
                Sentiment::Neutral,
            );
        }
        self.turns_processed += 1;

        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::QuizActive(session) => self.process_quiz_turn(session, input),
            Mode::AwaitingReminderTime(task) => self.process_reminder_turn(task, input),
            Mode::Normal => self.process_normal_turn(input),
        }
    }

    // ===== Quiz mode =====

    fn process_quiz_turn(&mut self, mut session: QuizSession, input: &str) -> TurnOutcome {
        // StopQuiz is checked once per turn, like any other input.
        if self.classifier.classify(input).kind == IntentKind::StopQuiz {
            self.log.log(ActivityCategory::Quiz, "Quiz stopped by user.");
            return TurnOutcome::new(
                "Quiz stopped. Let me know when you want to start again!",
                Sentiment::Neutral,
            );
        }

        match session.submit_answer(input) {
            AnswerResult::Invalid { option_count } => {
                let reply = format!(
                    "Please enter a valid number between 1 and {option_count}, or type 'stop quiz' to exit."
                );
                self.mode = Mode::QuizActive(session);
                TurnOutcome::new(reply, Sentiment::Error)
            }
            AnswerResult::Answered(outcome) => {
                let (feedback, tag) = if outcome.correct {
                    (format!("✅ Correct! {}", outcome.explanation), Sentiment::Happy)
                } else {
                    (
                        format!(
                            "❌ Incorrect. The correct answer was {}. {}",
                            outcome.correct_option, outcome.explanation
                        ),
                        Sentiment::Worried,
                    )
                };

                if session.is_complete() {
                    self.log.log(
                        ActivityCategory::Quiz,
                        &format!(
                            "Quiz finished with score: {}/{}",
                            session.score(),
                            session.len()
                        ),
                    );
                    let summary = format!(
                        "🏁 Quiz Complete! Your final score is: {}/{}\n\n{}",
                        session.score(),
                        session.len(),
                        session.tier_message()
                    );
                    TurnOutcome::new(format!("{feedback}\n\n{summary}"), Sentiment::Summary)
                } else {
                    let question = Self::render_question(&session);
                    self.mode = Mode::QuizActive(session);
                    TurnOutcome::new(format!("{feedback}\n\n{question}"), tag)
                }
            }
        }
    }

    fn render_question(session: &QuizSession) -> String {
        let Some(question) = session.current_question() else {
            return String::new();
        };
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, opt)| format!("{}. {}", i + 1, opt))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "❓ Question {}/{}:\n{}\n\n{}\n\nType the number of your answer.",
            session.question_number(),
            session.len(),
            question.text,
            options
        )
    }

    // ===== Reminder confirmation mode =====

    fn process_reminder_turn(&mut self, mut task: Task, input: &str) -> TurnOutcome {
        if self.classifier.classify(input).kind == IntentKind::Deny {
            self.log.log(
                ActivityCategory::Task,
                &format!("Task added: '{}' (no reminder).", task.title),
            );
            self.profile.tasks.push(task);
            return TurnOutcome::new(
                "Okay, I've added it to your list with no reminder.",
                Sentiment::Neutral,
            );
        }

        match parse_natural(input, Utc::now()) {
            Some(due) => {
                task.due_date = Some(due);
                self.log.log(
                    ActivityCategory::Task,
                    &format!(
                        "Reminder set: '{}' for {}",
                        task.title,
                        due.format("%Y-%m-%d %H:%M")
                    ),
                );
                let reply = format!(
                    "✅ Excellent, reminder set for {}.",
                    due.format("%Y-%m-%d %H:%M")
                );
                self.profile.tasks.push(task);
                TurnOutcome::new(reply, Sentiment::Happy)
            }
            None => {
                // Only a successful parse or an explicit denial advances state.
                self.mode = Mode::AwaitingReminderTime(task);
                TurnOutcome::new(
                    "When would you like to be reminded? (e.g., 'in 3 days', 'tomorrow at noon')",
                    Sentiment::Neutral,
                )
            }
        }
    }

    // ===== Normal mode =====

    fn process_normal_turn(&mut self, input: &str) -> TurnOutcome {
        self.facts.extract(&mut self.profile, input);
        let detected = self.sentiment.detect(input);
        self.profile.last_sentiment = detected;
        self.profile.record_interaction();

        let intent = self.classifier.classify(input);
        tracing::debug!(intent = ?intent.kind, "classified turn");

        // Paging context survives only consecutive log-viewing turns.
        if !matches!(intent.kind, IntentKind::ViewLog | IntentKind::ViewMoreLog) {
            self.log_page = None;
        }

        let mut outcome = self.dispatch_intent(&intent, detected);

        if let Some(caps) = NAME_RE.captures(input) {
            self.profile.name = caps[1].to_string();
            if matches!(intent.kind, IntentKind::Fallback | IntentKind::Greeting) {
                outcome = TurnOutcome::new(
                    format!("Got it! Nice to meet you, {}.", self.profile.name),
                    Sentiment::Happy,
                );
            }
        }

        outcome
    }

    fn dispatch_intent(&mut self, intent: &Intent, detected: Sentiment) -> TurnOutcome {
        match intent.kind {
            IntentKind::GetInfo => match intent.topic {
                Some(topic) => self.handle_get_info(topic, detected),
                None => self.handle_fallback(detected),
            },
            IntentKind::CreateTask => self.handle_create_task(intent),
            IntentKind::ListTasks => self.handle_list_tasks(),
            IntentKind::StartQuiz => self.handle_start_quiz(),
            IntentKind::StopQuiz => TurnOutcome::new(
                "There's no quiz in progress right now. Say 'start quiz' to begin one.",
                Sentiment::Neutral,
            ),
            IntentKind::ViewLog => {
                self.log_page = Some(0);
                TurnOutcome::new(self.render_log_page(), Sentiment::Summary)
            }
            IntentKind::ViewMoreLog => match self.log_page {
                None => TurnOutcome::new("Please ask to see the log first.", Sentiment::Neutral),
                Some(page) => {
                    self.log_page = Some(page + 1);
                    TurnOutcome::new(self.render_log_page(), Sentiment::Summary)
                }
            },
            IntentKind::RecallMemory => self.handle_recall_memory(),
            IntentKind::AcknowledgeInfo => {
                self.log.log(
                    ActivityCategory::System,
                    "User provided personal info, memory updated.",
                );
                TurnOutcome::new(
                    "Thanks, I'll remember that for our conversation!",
                    Sentiment::Happy,
                )
            }
            IntentKind::Greeting => TurnOutcome::new(
                format!("Hello {}! How can I assist you today?", self.profile.name),
                detected,
            ),
            IntentKind::ThankYou => TurnOutcome::new(
                format!("You're welcome, {}! Stay safe online.", self.profile.name),
                Sentiment::Happy,
            ),
            IntentKind::Help => TurnOutcome::new(Self::help_text(), Sentiment::Suggestion),
            IntentKind::Confirm => TurnOutcome::new(
                "What would you like to do next? You can ask about a security topic, manage reminders, or take a quiz.",
                Sentiment::Neutral,
            ),
            IntentKind::Deny => TurnOutcome::new(
                "Okay, no problem. I'm here when you need me.",
                Sentiment::Neutral,
            ),
            IntentKind::Fallback => self.handle_fallback(detected),
        }
    }

    fn handle_get_info(&mut self, topic: Topic, detected: Sentiment) -> TurnOutcome {
        self.profile.add_interest(topic.normalized());

        let mut parts: Vec<String> = Vec::new();
        if let Some(prefix) = self.responses.empathy_prefix(detected) {
            parts.push(prefix.to_string());
        }
        if let Some(personal) = self
            .responses
            .personalization(&self.profile, topic, &mut self.rng)
        {
            parts.push(personal);
        }
        parts.push(self.responses.topic_response(topic, &mut self.rng).to_string());

        TurnOutcome::new(parts.join(" "), detected)
    }

    fn handle_create_task(&mut self, intent: &Intent) -> TurnOutcome {
        let Some(title) = intent.entity("task") else {
            let detected = self.profile.last_sentiment;
            return self.handle_fallback(detected);
        };

        match intent.entity("time") {
            Some(time) => match parse_natural(time, Utc::now()) {
                Some(due) => {
                    let task = Task::new(title, "Created via chat.").with_due_date(due);
                    self.log.log(
                        ActivityCategory::Task,
                        &format!(
                            "Reminder set: '{}' for {}",
                            title,
                            due.format("%Y-%m-%d %H:%M")
                        ),
                    );
                    let reply = format!(
                        "✅ Got it! I will remind you to '{}' on {}.",
                        title,
                        due.format("%Y-%m-%d %H:%M")
                    );
                    self.profile.tasks.push(task);
                    TurnOutcome::new(reply, Sentiment::Happy)
                }
                None => {
                    self.mode = Mode::AwaitingReminderTime(Task::new(title, "Created via chat."));
                    TurnOutcome::new(
                        format!(
                            "✅ Task '{title}' added. I had trouble understanding the date. When should I remind you?"
                        ),
                        Sentiment::Neutral,
                    )
                }
            },
            None => {
                self.mode = Mode::AwaitingReminderTime(Task::new(title, "Created via chat."));
                TurnOutcome::new(
                    format!("✅ Task '{title}' has been added. Would you like to set a reminder for it?"),
                    Sentiment::Neutral,
                )
            }
        }
    }

    fn handle_list_tasks(&mut self) -> TurnOutcome {
        self.log
            .log(ActivityCategory::System, "User listed their current tasks.");

        let pending = self.profile.pending_tasks();
        if pending.is_empty() {
            return TurnOutcome::new("You have no pending tasks or reminders.", Sentiment::Neutral);
        }

        let lines = pending
            .iter()
            .map(|t| t.display_line())
            .collect::<Vec<_>>()
            .join("\n");
        TurnOutcome::new(
            format!("Here are your current reminders:\n{lines}"),
            Sentiment::Summary,
        )
    }

    fn handle_start_quiz(&mut self) -> TurnOutcome {
        let session = QuizSession::start(&question_bank(), self.config.quiz_length, &mut self.rng);
        self.log.log(
            ActivityCategory::Quiz,
            &format!("Quiz started with {} random questions.", session.len()),
        );
        let reply = format!(
            "🚀 Starting a random quiz! Type 'stop quiz' at any time to end it.\n\n{}",
            Self::render_question(&session)
        );
        self.mode = Mode::QuizActive(session);
        TurnOutcome::new(reply, Sentiment::Suggestion)
    }

    fn handle_recall_memory(&mut self) -> TurnOutcome {
        self.log
            .log(ActivityCategory::System, "User requested a memory recall.");

        if self.profile.facts.is_empty() {
            return TurnOutcome::new(
                "You haven't told me anything personal about yourself yet.",
                Sentiment::Neutral,
            );
        }

        let mut keys: Vec<&String> = self.profile.facts.keys().collect();
        keys.sort();
        let lines = keys
            .into_iter()
            .map(|key| {
                let value = &self.profile.facts[key];
                format!("• {}: {}", format_fact_key(key), value)
            })
            .collect::<Vec<_>>()
            .join("\n");
        TurnOutcome::new(
            format!("Here's what I remember about you:\n{lines}"),
            Sentiment::Summary,
        )
    }

    fn handle_fallback(&mut self, detected: Sentiment) -> TurnOutcome {
        let reply = self.responses.fallback_response(&self.profile, &mut self.rng);
        TurnOutcome::new(reply, detected)
    }

    fn render_log_page(&mut self) -> String {
        let page_size = self.config.log_page_size;
        let page = self.log_page.unwrap_or(0);
        let entries = self.log.entries();

        if entries.is_empty() {
            return "📜 There is no activity to show yet.".to_string();
        }

        let paged = page_entries(&entries, page, page_size);
        if paged.is_empty() {
            self.log_page = None;
            return "📜 You've reached the end of your activity log.".to_string();
        }

        let total = total_pages(entries.len(), page_size);
        let lines = paged
            .iter()
            .map(|e| e.formatted())
            .collect::<Vec<_>>()
            .join("\n");
        let mut rendered = format!("📜 Activity Log (Page {} of {}):\n\n{}", page + 1, total, lines);
        if (page + 1) * page_size < entries.len() {
            rendered.push_str("\n\nType 'more' or 'next' to see the next page.");
        }
        rendered
    }

    fn help_text() -> String {
        [
            "Here are some things you can do:",
            "",
            "💬 Ask about topics like: 'password safety', 'what is phishing?', 'info on VPNs'",
            "",
            "✔️ Manage tasks: 'remind me to update my pc tomorrow at 2pm', 'show my tasks'",
            "",
            "❓ Take a quiz: 'start a quiz' or 'test my knowledge'",
        ]
        .join("\n")
    }

    // ===== Task management used by the service/API layer =====

    /// All tasks, regardless of completion.
    pub fn tasks(&self) -> &[Task] {
        &self.profile.tasks
    }

    /// Create a task directly (task-manager surface, not the chat flow).
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        due_date: Option<chrono::DateTime<Utc>>,
    ) -> Task {
        let mut task = Task::new(title, description);
        task.due_date = due_date;
        self.log
            .log(ActivityCategory::Task, &format!("Created: {title}"));
        self.profile.tasks.push(task.clone());
        task
    }

    /// Edit a task's title, description, or due date.
    pub fn update_task(
        &mut self,
        task_id: &str,
        title: Option<&str>,
        description: Option<&str>,
        due_date: Option<Option<chrono::DateTime<Utc>>>,
    ) -> Option<Task> {
        let task = self.profile.tasks.iter_mut().find(|t| t.id == task_id)?;
        if let Some(title) = title {
            task.title = title.to_string();
        }
        if let Some(description) = description {
            task.description = description.to_string();
        }
        if let Some(due_date) = due_date {
            task.due_date = due_date;
        }
        let updated = task.clone();
        self.log
            .log(ActivityCategory::Task, &format!("Updated: {}", updated.title));
        Some(updated)
    }

    /// Toggle a task's completion flag.
    pub fn toggle_task(&mut self, task_id: &str) -> Option<Task> {
        let task = self.profile.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.toggle_completed();
        let toggled = task.clone();
        self.log.log(
            ActivityCategory::Task,
            &format!("Toggled Complete: {}", toggled.title),
        );
        Some(toggled)
    }

    /// Remove a task from the list.
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.profile.tasks.len();
        if let Some(task) = self.profile.tasks.iter().find(|t| t.id == task_id) {
            let title = task.title.clone();
            self.log
                .log(ActivityCategory::Task, &format!("Deleted: {title}"));
        }
        self.profile.tasks.retain(|t| t.id != task_id);
        self.profile.tasks.len() != before
    }
}

/// `skill_level` -> `Skill level`
fn format_fact_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DialogueEngine {
        DialogueEngine::new(EngineConfig {
            quiz_length: 10,
            log_page_size: 5,
            response_seed: Some(7),
        })
    }

    #[test]
    fn test_name_capture_overlay_rewrites_greeting() {
        let mut engine = engine();
        let outcome = engine.process_turn("hello, my name is Alex");
        assert_eq!(engine.profile().name, "Alex");
        assert!(outcome.reply.contains("Nice to meet you, Alex"));
    }

    #[test]
    fn test_name_capture_keeps_topic_reply() {
        let mut engine = engine();
        let outcome = engine.process_turn("i am Sam and i want to know about phishing");
        assert_eq!(engine.profile().name, "Sam");
        // GetInfo response is kept; only Fallback/Greeting are replaced.
        assert!(!outcome.reply.contains("Nice to meet you"));
    }

    #[test]
    fn test_get_info_records_interest() {
        let mut engine = engine();
        engine.process_turn("tell me about phishing");
        assert!(engine.profile().has_interest("phishing"));
    }

    #[test]
    fn test_quiz_lifecycle_start_answer_stop() {
        let mut engine = engine();
        let outcome = engine.process_turn("start quiz");
        assert_eq!(engine.mode_name(), "quiz");
        assert!(outcome.reply.contains("Question 1/10"));

        // Invalid answer re-prompts without advancing.
        let outcome = engine.process_turn("99");
        assert_eq!(outcome.sentiment, Sentiment::Error);
        assert!(outcome.reply.contains("valid number"));
        assert_eq!(engine.mode_name(), "quiz");

        let outcome = engine.process_turn("stop quiz");
        assert_eq!(engine.mode_name(), "normal");
        assert!(outcome.reply.contains("Quiz stopped"));
    }

    #[test]
    fn test_reminder_flow_with_unparseable_time() {
        let mut engine = engine();
        let outcome = engine.process_turn("remind me to renew my vpn subscription someday soon");
        assert_eq!(engine.mode_name(), "awaiting_reminder");
        assert!(outcome.reply.contains("renew my vpn subscription"));

        // Unparseable confirmation keeps the state.
        engine.process_turn("hmm let me think");
        assert_eq!(engine.mode_name(), "awaiting_reminder");

        let outcome = engine.process_turn("tomorrow at noon");
        assert_eq!(engine.mode_name(), "normal");
        assert!(outcome.reply.contains("reminder set for"));
        assert_eq!(engine.profile().tasks.len(), 1);
        assert!(engine.profile().tasks[0].due_date.is_some());
    }

    #[test]
    fn test_reminder_flow_denied_commits_without_date() {
        let mut engine = engine();
        engine.process_turn("add a task to check my router settings");
        assert_eq!(engine.mode_name(), "awaiting_reminder");

        let outcome = engine.process_turn("no");
        assert_eq!(engine.mode_name(), "normal");
        assert!(outcome.reply.contains("no reminder"));
        assert_eq!(engine.profile().tasks.len(), 1);
        assert!(engine.profile().tasks[0].due_date.is_none());
    }

    #[test]
    fn test_create_task_with_parseable_time_commits_immediately() {
        let mut engine = engine();
        let outcome = engine.process_turn("remind me to update my pc tomorrow at 2pm");
        assert_eq!(engine.mode_name(), "normal");
        assert!(outcome.reply.contains("update my pc"));
        assert_eq!(engine.profile().tasks.len(), 1);
        assert!(engine.profile().tasks[0].due_date.is_some());
    }

    #[test]
    fn test_log_paging_cursor_resets_on_other_intents() {
        let mut engine = engine();
        engine.process_turn("show my log");
        assert_eq!(engine.log_page, Some(0));

        engine.process_turn("tell me about vpn");
        assert_eq!(engine.log_page, None);

        let outcome = engine.process_turn("more");
        assert!(outcome.reply.contains("Please ask to see the log first."));
    }

    #[test]
    fn test_log_paging_past_end_resets_cursor() {
        let mut engine = engine();
        // Only the session-start entry exists: one page.
        engine.process_turn("show my activity");
        let outcome = engine.process_turn("more");
        assert!(outcome.reply.contains("end of your activity log"));
        assert_eq!(engine.log_page, None);
    }

    #[test]
    fn test_recall_memory_formats_keys() {
        let mut engine = engine();
        engine.process_turn("i work as a nurse");
        let outcome = engine.process_turn("what do you know about me");
        assert!(outcome.reply.contains("Here's what I remember about you:"));
        assert!(outcome.reply.contains("• Job: a nurse"));
    }

    #[test]
    fn test_recall_memory_empty() {
        let mut engine = engine();
        let outcome = engine.process_turn("what do you know about me");
        assert!(outcome.reply.contains("haven't told me anything"));
    }

    #[test]
    fn test_list_tasks_orders_and_formats() {
        let mut engine = engine();
        engine.process_turn("remind me to second thing tomorrow at 5pm");
        engine.process_turn("add a task to first thing");
        engine.process_turn("no");

        let outcome = engine.process_turn("show my tasks");
        let dated = outcome.reply.find("second thing").unwrap();
        let undated = outcome.reply.find("first thing").unwrap();
        assert!(dated < undated, "dated tasks sort before undated ones");
        assert!(outcome.reply.contains("(Due: N/A)"));
    }

    #[test]
    fn test_empty_input_never_reaches_classifier() {
        let mut engine = engine();
        let before = engine.profile().interaction_count;
        engine.process_turn("   ");
        assert_eq!(engine.profile().interaction_count, before);
    }

    #[test]
    fn test_fact_key_formatting() {
        assert_eq!(format_fact_key("skill_level"), "Skill level");
        assert_eq!(format_fact_key("job"), "Job");
    }
}
