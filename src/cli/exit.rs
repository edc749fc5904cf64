/// Run outcome determining the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every check passed (exit 0).
    AllPassed,
    /// At least one check failed (exit 1).
    Partial,
    /// Bad invocation or unreadable input (exit 2).
    Refusal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::AllPassed => 0,
            Outcome::Partial => 1,
            Outcome::Refusal => 2,
        }
    }
}
