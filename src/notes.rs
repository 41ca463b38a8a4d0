pub const COMMON_ISSUES: &str = include_str!("../data/notes/common_issues.txt");
pub const VALIDATION_CHECKLIST: &str = include_str!("../data/notes/validation_checklist.txt");
pub const KEY_IMPROVEMENTS: &str = include_str!("../data/notes/key_improvements.txt");
