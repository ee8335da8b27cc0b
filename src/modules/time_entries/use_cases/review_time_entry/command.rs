// Command data type for an administrator's verdict on a finished time entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Approve => "approved",
            Verdict::Reject => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTimeEntry {
    pub time_entry_id: String,
    pub verdict: Verdict,
    pub reviewer_id: String,
    pub reviewer_is_admin: bool,
}
