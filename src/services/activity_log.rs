//! 活动日志服务
//!
//! 会话范围内的只追加日志：随会话创建为空，随会话销毁。
//! 分页是对倒序序列的纯切片，由调用方（对话引擎与 API）共用。

use crate::models::activity::{ActivityCategory, LogEntry};

/// 会话范围的活动日志
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    /// 创建空日志
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 追加一条记录（总是成功，取当前时间）
    pub fn log(&mut self, category: ActivityCategory, description: &str) {
        tracing::debug!(category = %category, "activity: {}", description);
        self.entries.push(LogEntry::new(category, description));
    }

    /// 按时间倒序（最新在前）返回全部条目
    pub fn entries(&self) -> Vec<&LogEntry> {
        self.entries.iter().rev().collect()
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 对倒序条目序列取第 `page` 页（从 0 开始）
pub fn page_entries<'a>(entries: &'a [&'a LogEntry], page: usize, page_size: usize) -> &'a [&'a LogEntry] {
    let start = page.saturating_mul(page_size);
    if start >= entries.len() {
        return &[];
    }
    let end = (start + page_size).min(entries.len());
    &entries[start..end]
}

/// 总页数（向上取整）
pub fn total_pages(entry_count: usize, page_size: usize) -> usize {
    entry_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with(count: usize) -> ActivityLog {
        let mut log = ActivityLog::new();
        for i in 0..count {
            log.log(ActivityCategory::System, &format!("event {i}"));
        }
        log
    }

    #[test]
    fn test_entries_are_most_recent_first() {
        let log = log_with(3);
        let entries = log.entries();
        assert_eq!(entries[0].description, "event 2");
        assert_eq!(entries[2].description, "event 0");
    }

    #[test]
    fn test_pagination_over_twelve_entries() {
        let log = log_with(12);
        let entries = log.entries();

        let page0 = page_entries(&entries, 0, 5);
        assert_eq!(page0.len(), 5);
        assert_eq!(page0[0].description, "event 11");
        assert_eq!(page0[4].description, "event 7");

        let page1 = page_entries(&entries, 1, 5);
        assert_eq!(page1.len(), 5);
        assert_eq!(page1[0].description, "event 6");

        let page2 = page_entries(&entries, 2, 5);
        assert_eq!(page2.len(), 2);
        assert_eq!(page2[1].description, "event 0");

        assert!(page_entries(&entries, 3, 5).is_empty());
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(total_pages(0, 5), 0);
    }
}
