/// Records that can always be turned into a short display string,
/// used in log lines and the audit trail.
pub trait Stringable {
    fn render(&self) -> String;
}
