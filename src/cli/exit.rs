/// Exit codes used by the distzip CLI.
///
/// Mapping:
///   0 — success (archive created)
///   1 — build failure (archive could not be written; partial artifact possible)
///   2 — refusal (bad configuration or usage; nothing written)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Refusal = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}
