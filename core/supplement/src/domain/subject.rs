//! 評価対象（サプリメント名）

/// 既定で評価する対象（この順に処理し、この順で出力する）
pub const DEFAULT_SUBJECTS: [&str; 3] = ["Creatine Monohydrate", "Ashwagandha", "Resveratrol"];

/// 評価対象の名前
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectName(String);

impl SubjectName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 既定の対象一覧
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SUBJECTS.iter().map(|s| Self::new(*s)).collect()
    }
}

impl std::ops::Deref for SubjectName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SubjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
